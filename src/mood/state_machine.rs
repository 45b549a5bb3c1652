use super::types::{Mood, MoodEntry};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use statig::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInEvent {
    Select(Mood),
    UpdateNote(String),
    Submit,
    NewCheckIn,
}

/// Daily mood check-in form
#[derive(Debug, Default)]
pub struct MoodCheckIn {
    selected: Option<Mood>,
    note: String,
    submitted: Option<MoodEntry>,
}

impl MoodCheckIn {
    pub fn new() -> Self {
        Self::default()
    }
}

#[state_machine(initial = "State::selecting()")]
impl MoodCheckIn {
    #[state]
    fn selecting(&mut self, event: &CheckInEvent) -> Outcome<State> {
        match event {
            CheckInEvent::Select(mood) => {
                self.selected = Some(*mood);
                tracing::debug!(mood = %mood, "Mood selected");
                Handled
            }
            CheckInEvent::UpdateNote(note) => {
                self.note = note.clone();
                Handled
            }
            CheckInEvent::Submit => {
                let Some(mood) = self.selected else {
                    tracing::debug!("Submit ignored, no mood selected");
                    return Handled;
                };
                let note = self.note.trim();
                let entry = MoodEntry {
                    mood,
                    note: (!note.is_empty()).then(|| note.to_string()),
                    recorded_at: Utc::now(),
                };
                tracing::info!(
                    mood = %entry.mood,
                    note = entry.note.as_deref().unwrap_or(""),
                    recorded_at = %entry.recorded_at,
                    "Mood submitted"
                );
                self.submitted = Some(entry);
                Transition(State::submitted())
            }
            CheckInEvent::NewCheckIn => Handled,
        }
    }

    #[state]
    fn submitted(&mut self, event: &CheckInEvent) -> Outcome<State> {
        match event {
            CheckInEvent::NewCheckIn => {
                self.clear();
                tracing::debug!("Starting a new check-in");
                Transition(State::selecting())
            }
            _ => Handled,
        }
    }
}

impl MoodCheckIn {
    fn clear(&mut self) {
        self.selected = None;
        self.note.clear();
        self.submitted = None;
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Submit stays disabled until a mood is picked
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.submitted.is_none()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    pub fn entry(&self) -> Option<&MoodEntry> {
        self.submitted.as_ref()
    }
}
