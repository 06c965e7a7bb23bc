//! Domain model types (pure).
//!
//! All types in this module are plain data; state transitions live in
//! `crate::state`.

pub mod conversation;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod message;

// Re-export for convenience
pub use conversation::Conversation;
pub use error::{AppError, DataError};
pub use identifiers::{ConversationId, MessageId};
pub use key_action::KeyAction;
pub use message::{Message, Side};
