/// Popup settings, optionally overridden from chrome.storage.local
use serde::{Deserialize, Serialize};

/// chrome.storage.local key holding a `PopupConfig` override
pub const STORAGE_KEY: &str = "video_topics_config";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/process";
pub const DEFAULT_TOPIC_CHOICES: [u32; 4] = [3, 5, 7, 10];

/// Same default the processing service applies when the count is missing
pub const DEFAULT_TOPIC_COUNT: u32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub endpoint: String,
    pub topic_choices: Vec<u32>,
    pub default_topic_count: u32,
}

impl PopupConfig {
    pub fn new() -> Self {
        PopupConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            topic_choices: DEFAULT_TOPIC_CHOICES.to_vec(),
            default_topic_count: DEFAULT_TOPIC_COUNT,
        }
    }

    /// Repair values a hand-edited override may get wrong
    pub fn normalized(mut self) -> Self {
        if self.endpoint.trim().is_empty() {
            self.endpoint = DEFAULT_ENDPOINT.to_string();
        }

        self.topic_choices.retain(|&n| n > 0);
        self.topic_choices.sort_unstable();
        self.topic_choices.dedup();
        if self.topic_choices.is_empty() {
            self.topic_choices = DEFAULT_TOPIC_CHOICES.to_vec();
        }

        if !self.topic_choices.contains(&self.default_topic_count) {
            self.default_topic_count = self.topic_choices[0];
        }

        self
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self::new()
    }
}
