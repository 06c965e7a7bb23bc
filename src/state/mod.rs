//! UI state machine (pure).
//!
//! All state transitions are plain methods and functions, testable without
//! a terminal.

pub mod app_state;
pub mod composer;
pub mod directory;
pub mod filter;
pub mod input_handler;
pub mod layout;
pub mod message_log;
pub mod mouse_handler;
pub mod selector;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use composer::Composer;
pub use directory::ChatDirectory;
pub use filter::DirectoryFilter;
pub use input_handler::{handle_composer_key, handle_filter_key};
pub use layout::LayoutShell;
pub use message_log::{MessageLog, MessageStore, ThreadMode};
pub use mouse_handler::{handle_click, handle_thread_wheel, ClickTarget};
pub use selector::ConversationSelector;
