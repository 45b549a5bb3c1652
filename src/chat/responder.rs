//! Reply generation for the chat companion
//!
//! Replies are fixed templates picked by keyword. There is no language
//! understanding behind them.

use async_trait::async_trait;

pub const GREETING: &str =
    "Hello! I'm your mental wellness companion. How are you feeling today?";

const ANXIOUS_KEYWORDS: &[&str] = &["anxious", "stressed"];
const LOW_KEYWORDS: &[&str] = &["sad", "depressed"];
const POSITIVE_KEYWORDS: &[&str] = &["happy", "good"];

const ANXIOUS_REPLY: &str = "I notice you're feeling anxious. Let's try a quick breathing exercise to help calm your mind. Would you like to try that now?";
const LOW_REPLY: &str = "I'm sorry to hear you're feeling down. Remember that it's okay to have these feelings. Would you like to talk more about what's troubling you or would you prefer some mood-lifting activities?";
const POSITIVE_REPLY: &str = "I'm glad you're feeling well today! It's wonderful to hear that. What positive things have happened recently that you'd like to share?";
const DEFAULT_REPLY: &str = "Thank you for sharing. How long have you been feeling this way? I'm here to listen and help you navigate these emotions.";

/// Produces the companion's reply to a user message
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, input: &str) -> String;
}

/// Keyword-matched template replies. The first matching rule wins.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    rules: Vec<(&'static [&'static str], &'static str)>,
    fallback: &'static str,
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self {
            rules: vec![
                (ANXIOUS_KEYWORDS, ANXIOUS_REPLY),
                (LOW_KEYWORDS, LOW_REPLY),
                (POSITIVE_KEYWORDS, POSITIVE_REPLY),
            ],
            fallback: DEFAULT_REPLY,
        }
    }
}

impl CannedResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_for(&self, input: &str) -> &'static str {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, reply)| *reply)
            .unwrap_or(self.fallback)
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, input: &str) -> String {
        self.reply_for(input).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_replies() {
        let responder = CannedResponder::new();
        assert_eq!(responder.reply_for("I'm so STRESSED about work"), ANXIOUS_REPLY);
        assert_eq!(responder.reply_for("feeling sad today"), LOW_REPLY);
        assert_eq!(responder.reply_for("Pretty happy actually"), POSITIVE_REPLY);
        assert_eq!(responder.reply_for("just tired"), DEFAULT_REPLY);
    }

    #[test]
    fn test_first_rule_wins() {
        let responder = CannedResponder::new();
        assert_eq!(responder.reply_for("good but anxious"), ANXIOUS_REPLY);
        assert_eq!(responder.reply_for("sad, not happy"), LOW_REPLY);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        let responder = CannedResponder::new();
        assert_eq!(responder.reply_for("goodness me"), POSITIVE_REPLY);
    }
}
