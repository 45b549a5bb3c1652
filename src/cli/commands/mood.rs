use super::Command;
use crate::mood::{record_check_in, Mood};
use anyhow::{Context, Result};

pub struct MoodCommand {
    pub mood: Option<String>,
    pub note: Option<String>,
    pub json: bool,
}

impl MoodCommand {
    pub fn new(mood: Option<String>, note: Option<String>) -> Self {
        Self {
            mood,
            note,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl Command for MoodCommand {
    async fn execute(&self) -> Result<()> {
        let Some(raw) = self.mood.as_deref() else {
            show_mood_options();
            return Ok(());
        };

        let mood: Mood = raw.parse()?;
        let entry = record_check_in(mood, self.note.as_deref())
            .context("Mood check-in was not accepted")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entry)?);
            return Ok(());
        }

        println!("✅ Thank you for checking in!");
        println!();
        println!("Your mood check-in has been recorded. Tracking your moods regularly helps you understand your emotional patterns.");
        println!();
        println!("  Mood: {} {}", entry.mood.emoji(), entry.mood);
        if let Some(note) = &entry.note {
            println!("  Note: {note}");
        }
        println!();
        println!("💡 Run 'mindful mood <mood>' again for a new check-in");
        Ok(())
    }
}

fn show_mood_options() {
    println!("📝 How are you feeling today?");
    println!();
    for mood in Mood::ALL {
        println!("  {} {:<6} mindful mood {}", mood.emoji(), mood.label(), mood.label().to_lowercase());
    }
    println!();
    println!("Add what's influencing your mood with --note \"...\" (optional)");
}
