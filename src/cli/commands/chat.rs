use super::Command;
use crate::chat::{ChatMessage, ChatSession, Sender};
use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const QUIT: &str = "/quit";

pub struct ChatCommand {
    pub message: Option<String>,
    pub reply_delay: Duration,
}

impl ChatCommand {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            message: None,
            reply_delay,
        }
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

impl Command for ChatCommand {
    async fn execute(&self) -> Result<()> {
        let mut session = ChatSession::new(self.reply_delay);

        for message in session.history() {
            print_message(message);
        }

        if let Some(message) = &self.message {
            exchange(&mut session, message).await?;
            return Ok(());
        }

        println!("(type your message and press Enter, {QUIT} or Ctrl-D to leave)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                println!();
                break;
            };
            if line.trim() == QUIT {
                break;
            }
            exchange(&mut session, &line).await?;
        }

        tracing::info!(
            user_messages = session.user_message_count(),
            "Chat session ended"
        );
        println!("💙 Take care. Come back any time.");
        Ok(())
    }
}

async fn exchange(session: &mut ChatSession, input: &str) -> Result<()> {
    if !ChatSession::accepts(input) {
        return Ok(());
    }

    print!("💬 Companion is typing...");
    std::io::stdout().flush()?;

    if let Some(reply) = session.send(input).await {
        println!();
        print_message(&reply);
    }
    Ok(())
}

fn print_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Companion => "Companion",
    };
    println!("[{}] {}: {}", message.display_time(), who, message.content);
}
