/// Popup controller: the submit → request → render cycle
///
/// The controller owns nothing browser-specific. It drives a `PopupView`
/// (result area + busy indicator) and a `TopicService` (the network call),
/// so the Yew component and the tests plug in their own implementations.
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{ProcessRequest, TopicService};
use crate::config::DEFAULT_TOPIC_COUNT;
use crate::error::ProcessError;
use crate::topics::{Topic, parse_topics};

/// What the result area shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultDisplay {
    #[default]
    Empty,
    Prompt(String),
    Topics(Vec<Topic>),
    Error(String),
}

/// The mutable parts of the popup the controller is allowed to touch
pub trait PopupView {
    fn set_busy(&self, busy: bool);
    fn show_result(&self, display: ResultDisplay);
}

/// Generation counter shared by every submit of one popup.
/// Only the newest generation may update the view.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

impl RequestTracker {
    pub fn begin(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }
}

#[derive(Clone)]
pub struct PopupController<V, S> {
    view: V,
    service: S,
    tracker: RequestTracker,
    fallback_topic_count: u32,
}

impl<V: PopupView, S: TopicService> PopupController<V, S> {
    pub fn new(view: V, service: S, tracker: RequestTracker) -> Self {
        PopupController {
            view,
            service,
            tracker,
            fallback_topic_count: DEFAULT_TOPIC_COUNT,
        }
    }

    /// Count sent when the selector value is not an integer
    pub fn with_fallback_topic_count(mut self, count: u32) -> Self {
        self.fallback_topic_count = count;
        self
    }

    /// Handle one click on the process trigger
    pub async fn submit(&self, raw_url: &str, raw_topic_count: &str) {
        let generation = self.tracker.begin();
        self.view.show_result(ResultDisplay::Empty);

        let request = match ProcessRequest::new(raw_url, self.parse_topic_count(raw_topic_count)) {
            Ok(request) => request,
            Err(e) => {
                self.view.show_result(ResultDisplay::Prompt(e.user_message()));
                self.view.set_busy(false);
                return;
            }
        };

        self.view.set_busy(true);
        log::info!(
            "Requesting {} topics for {} (#{})",
            request.num_topicos,
            request.video_url,
            generation
        );

        let outcome = self.service.fetch_topics(&request).await;

        if !self.tracker.is_current(generation) {
            log::debug!("Dropping stale response for request #{}", generation);
            return;
        }

        self.view.show_result(render_outcome(outcome));
        self.view.set_busy(false);
    }

    fn parse_topic_count(&self, raw: &str) -> u32 {
        raw.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Topic count {:?} is not a number, using {}",
                raw,
                self.fallback_topic_count
            );
            self.fallback_topic_count
        })
    }
}

fn render_outcome(outcome: Result<String, ProcessError>) -> ResultDisplay {
    match outcome {
        Ok(raw) => {
            let topics = parse_topics(&raw);
            log::info!("Received {} topics", topics.len());
            ResultDisplay::Topics(topics)
        }
        Err(e) => {
            log::warn!("Processing failed: {}", e);
            ResultDisplay::Error(e.user_message())
        }
    }
}
