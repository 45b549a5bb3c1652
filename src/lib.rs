// Mindful Library - Mental Wellness Companion
// This exposes the core components for testing and integration

pub mod breathing;
pub mod chat;
pub mod cli;
pub mod config;
pub mod mood;
pub mod observability;
pub mod resources;
pub mod shutdown;
pub mod telemetry;

// Re-export key types for easy access
pub use breathing::{
    BreathingSession, Phase, SequencerSnapshot, SequencerState, SessionConfig, SessionError,
    SessionHandle,
};
pub use chat::{CannedResponder, ChatMessage, ChatSession, Responder};
pub use config::{config, MindfulConfig};
pub use mood::{Mood, MoodCheckIn, MoodEntry};
pub use observability::SessionMetrics;
pub use resources::{Resource, ResourceKind};
pub use shutdown::ShutdownCoordinator;
pub use telemetry::{create_session_span, generate_session_id, init_telemetry};
