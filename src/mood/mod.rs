// Mood Check-in Module
//
// The daily check-in form as a small state machine. Submissions are only
// logged; nothing is persisted.

pub mod state_machine;
pub mod types;

pub use state_machine::{CheckInEvent, MoodCheckIn};
pub use types::{Mood, MoodEntry, MoodError};

use statig::prelude::*;

/// Fill in and submit one check-in in a single step.
pub fn record_check_in(mood: Mood, note: Option<&str>) -> Option<MoodEntry> {
    let mut form = MoodCheckIn::new().state_machine();
    form.handle(&CheckInEvent::Select(mood));
    if let Some(note) = note {
        form.handle(&CheckInEvent::UpdateNote(note.to_string()));
    }
    form.handle(&CheckInEvent::Submit);
    form.inner().entry().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_check_in() {
        let entry = record_check_in(Mood::Low, Some("deadline stress")).unwrap();
        assert_eq!(entry.mood, Mood::Low);
        assert_eq!(entry.note.as_deref(), Some("deadline stress"));

        let entry = record_check_in(Mood::Great, Some("   ")).unwrap();
        assert_eq!(entry.note, None);
    }
}
