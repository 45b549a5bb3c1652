// Chat Companion Module
//
// Canned-response chat: messages, the reply seam, and an in-memory session.

pub mod responder;
pub mod session;
pub mod types;

pub use responder::{CannedResponder, Responder, GREETING};
pub use session::ChatSession;
pub use types::{ChatMessage, Sender};
