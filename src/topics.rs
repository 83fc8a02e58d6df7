/// Topic list extraction from the service's raw topics string
use regex::Regex;
use std::sync::LazyLock;

/// "1. ", "2.  ", "10.\t" ... ASCII digits only
static TOPIC_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.\s+").expect("topic delimiter pattern is valid"));

/// One extracted topic, numbered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub index: usize,
    pub text: String,
}

/// Split the raw topics string into a renumbered list
///
/// Algorithm:
/// 1. Split on the numbered-list delimiter (digits, a period, whitespace)
/// 2. Trim every fragment and drop the empty ones
/// 3. Number the survivors from 1, ignoring the source numbering
///
/// Examples:
/// - "1. Intro 2. Details 3. Summary" → [1: Intro, 2: Details, 3: Summary]
/// - "4. First 4. Second" → [1: First, 2: Second]
/// - "No numbering here" → [1: No numbering here]
pub fn parse_topics(raw: &str) -> Vec<Topic> {
    TOPIC_DELIMITER
        .split(raw)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(i, text)| Topic {
            index: i + 1,
            text: text.to_string(),
        })
        .collect()
}
