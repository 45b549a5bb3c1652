use super::responder::{CannedResponder, Responder, GREETING};
use super::types::{ChatMessage, Sender};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// One conversation with the companion, held in memory only
pub struct ChatSession {
    responder: Arc<dyn Responder>,
    reply_delay: Duration,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// New session using the canned keyword replies
    pub fn new(reply_delay: Duration) -> Self {
        Self::with_responder(Arc::new(CannedResponder::new()), reply_delay)
    }

    pub fn with_responder(responder: Arc<dyn Responder>, reply_delay: Duration) -> Self {
        Self {
            responder,
            reply_delay,
            history: vec![ChatMessage::companion(GREETING)],
        }
    }

    /// Blank input is never sent
    pub fn accepts(input: &str) -> bool {
        !input.trim().is_empty()
    }

    /// Send a user message and wait for the companion's reply.
    ///
    /// Returns `None` without touching the transcript when `input` is blank.
    pub async fn send(&mut self, input: &str) -> Option<ChatMessage> {
        if !Self::accepts(input) {
            debug!("Ignoring blank chat input");
            return None;
        }

        self.history.push(ChatMessage::user(input));
        info!(chars = input.chars().count(), "User message received");

        tokio::time::sleep(self.reply_delay).await;

        let reply = ChatMessage::companion(self.responder.respond(input).await);
        self.history.push(reply.clone());
        Some(reply)
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn user_message_count(&self) -> usize {
        self.history
            .iter()
            .filter(|message| message.sender == Sender::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::time::Instant;

    struct EchoResponder;

    #[async_trait]
    impl Responder for EchoResponder {
        async fn respond(&self, input: &str) -> String {
            format!("echo: {input}")
        }
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let session = ChatSession::new(Duration::ZERO);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].sender, Sender::Companion);
        assert_eq!(session.history()[0].content, GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_typing_delay() {
        let mut session = ChatSession::new(Duration::from_millis(1500));
        let started = Instant::now();

        let reply = session.send("I feel anxious").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(reply.sender, Sender::Companion);
        assert!(reply.content.contains("breathing exercise"));
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.user_message_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new(Duration::ZERO);
        assert!(session.send("   ").await.is_none());
        assert!(session.send("").await.is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_responder() {
        let mut session = ChatSession::with_responder(Arc::new(EchoResponder), Duration::ZERO);
        let reply = session.send("hello").await.unwrap();
        assert_eq!(reply.content, "echo: hello");
        assert_eq!(session.history()[1].content, "hello");
        assert_eq!(session.history()[1].sender, Sender::User);
    }
}
