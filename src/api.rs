/// Wire types and client for the topic processing service
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProcessError;

/// Body of `POST /process`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRequest {
    pub video_url: String,
    pub num_topicos: u32,
}

impl ProcessRequest {
    /// Trim the URL and reject it when nothing is left
    pub fn new(video_url: &str, num_topicos: u32) -> Result<ProcessRequest, ProcessError> {
        let video_url = video_url.trim();
        if video_url.is_empty() {
            return Err(ProcessError::EmptyUrl);
        }

        Ok(ProcessRequest {
            video_url: video_url.to_string(),
            num_topicos,
        })
    }
}

/// 2xx body
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponse {
    pub topics: String,
}

/// Message carried by a non-2xx body's `error` field
///
/// Strings pass through, other truthy values are shown in their JSON form,
/// and null/false/0/missing leave the caller to pick a fallback.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Turn a status/body pair into the raw topics string or a classified error
///
/// Bodies that are not the expected JSON count as transport failures, on both
/// the success and the error path.
pub fn interpret_response(success: bool, body: &str) -> Result<String, ProcessError> {
    if success {
        serde_json::from_str::<ProcessResponse>(body)
            .map(|response| response.topics)
            .map_err(|e| ProcessError::Transport(format!("Failed to parse topics: {}", e)))
    } else {
        let error_body: Value = serde_json::from_str(body)
            .map_err(|e| ProcessError::Transport(format!("Failed to parse error body: {}", e)))?;
        Err(ProcessError::Service {
            message: error_message(&error_body),
        })
    }
}

/// Anything that can turn a request into a raw topics string
#[async_trait(?Send)]
pub trait TopicService {
    async fn fetch_topics(&self, request: &ProcessRequest) -> Result<String, ProcessError>;
}

/// reqwest-backed client; runs on fetch when compiled to wasm32
#[derive(Debug, Clone)]
pub struct HttpTopicService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTopicService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpTopicService {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl TopicService for HttpTopicService {
    async fn fetch_topics(&self, request: &ProcessRequest) -> Result<String, ProcessError> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ProcessError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProcessError::Transport(format!("Failed to read body: {}", e)))?;

        log::debug!("{} answered {}", self.endpoint, status);
        interpret_response(status.is_success(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_trims_url() {
        let request = ProcessRequest::new("  https://youtu.be/abc  ", 5).unwrap();

        assert_eq!(request.video_url, "https://youtu.be/abc");
        assert_eq!(request.num_topicos, 5);
    }

    #[test]
    fn test_request_rejects_blank_url() {
        assert_eq!(ProcessRequest::new("", 5), Err(ProcessError::EmptyUrl));
        assert_eq!(ProcessRequest::new(" \t\n", 5), Err(ProcessError::EmptyUrl));
    }

    #[test]
    fn test_request_wire_format() {
        let request = ProcessRequest::new("https://youtu.be/abc", 7).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"video_url": "https://youtu.be/abc", "num_topicos": 7})
        );
    }

    #[test]
    fn test_interpret_success() {
        let raw = interpret_response(true, r#"{"topics": "1. Intro 2. Outro"}"#).unwrap();
        assert_eq!(raw, "1. Intro 2. Outro");
    }

    #[test]
    fn test_interpret_success_missing_topics() {
        let result = interpret_response(true, r#"{"result": "1. Intro"}"#);
        assert!(matches!(result, Err(ProcessError::Transport(_))));
    }

    #[test]
    fn test_interpret_success_not_json() {
        let result = interpret_response(true, "<html>oops</html>");
        assert!(matches!(result, Err(ProcessError::Transport(_))));
    }

    #[test]
    fn test_interpret_service_error() {
        let result = interpret_response(false, r#"{"error": "bad link"}"#);
        assert_eq!(
            result,
            Err(ProcessError::Service {
                message: Some("bad link".to_string())
            })
        );
    }

    #[test]
    fn test_interpret_service_error_without_message() {
        let result = interpret_response(false, "{}");
        assert_eq!(result, Err(ProcessError::Service { message: None }));
    }

    #[test]
    fn test_interpret_service_error_not_json() {
        let result = interpret_response(false, "Internal Server Error");
        assert!(matches!(result, Err(ProcessError::Transport(_))));
    }

    #[test]
    fn test_interpret_service_error_non_string_message() {
        assert_eq!(
            interpret_response(false, r#"{"error": 5}"#),
            Err(ProcessError::Service {
                message: Some("5".to_string())
            })
        );
        assert_eq!(
            interpret_response(false, r#"{"error": {"code": 12}}"#),
            Err(ProcessError::Service {
                message: Some(r#"{"code":12}"#.to_string())
            })
        );
    }

    #[test]
    fn test_interpret_service_error_falsy_message() {
        for body in [r#"{"error": null}"#, r#"{"error": false}"#, r#"{"error": 0}"#, "[]"] {
            assert_eq!(
                interpret_response(false, body),
                Err(ProcessError::Service { message: None }),
                "body: {}",
                body
            );
        }
    }

    #[tokio::test]
    async fn test_http_service_posts_json_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/process"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "video_url": "https://youtu.be/abc",
                "num_topicos": 3
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"topics": "1. Intro 2. Outro"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpTopicService::new(format!("{}/process", server.uri()));
        let request = ProcessRequest::new("https://youtu.be/abc", 3).unwrap();

        let raw = service.fetch_topics(&request).await.unwrap();
        assert_eq!(raw, "1. Intro 2. Outro");
    }

    #[tokio::test]
    async fn test_http_service_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/process"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "bad link"})),
            )
            .mount(&server)
            .await;

        let service = HttpTopicService::new(format!("{}/process", server.uri()));
        let request = ProcessRequest::new("https://youtu.be/abc", 3).unwrap();

        assert_eq!(
            service.fetch_topics(&request).await,
            Err(ProcessError::Service {
                message: Some("bad link".to_string())
            })
        );
    }

    #[tokio::test]
    async fn test_http_service_non_json_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/process"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let service = HttpTopicService::new(format!("{}/process", server.uri()));
        let request = ProcessRequest::new("https://youtu.be/abc", 3).unwrap();

        let result = service.fetch_topics(&request).await;
        assert!(matches!(result, Err(ProcessError::Transport(_))));
    }

    #[tokio::test]
    async fn test_http_service_connection_refused() {
        // Grab a free port, then release it so nothing is listening
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let service = HttpTopicService::new(format!("http://127.0.0.1:{}/process", port));
        let request = ProcessRequest::new("https://youtu.be/abc", 3).unwrap();

        let result = service.fetch_topics(&request).await;
        assert!(matches!(result, Err(ProcessError::Transport(_))));
    }
}
