// Breathing Exercise Module
//
// Four-phase breathing sequencer (pure state transitions) and the tokio
// timer driver that feeds it one tick per second while running.

pub mod driver;
pub mod phase;
pub mod sequencer;

pub use driver::{BreathingSession, SessionConfig, SessionError, SessionHandle};
pub use phase::{Animation, Phase, CYCLE_SECS};
pub use sequencer::{SequencerSnapshot, SequencerState};
