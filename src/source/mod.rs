//! Chat data sources.
//!
//! The directory and the initial thread come either from the built-in sample
//! or from a JSON data file:
//!
//! ```json
//! {
//!   "conversations": [{ "id": 1, "name": "Алексей", "unread": 2 }],
//!   "messages": [{ "id": 1, "text": "Привет!", "side": "them", "timestamp": "14:20" }]
//! }
//! ```

use crate::model::{Conversation, DataError, Message};
use crate::state::ChatDirectory;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod sample;

pub use sample::{sample_conversations, sample_directory, sample_messages};

/// Where the directory and message seed come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Compiled-in sample data.
    Builtin,
    /// JSON data file.
    File(PathBuf),
}

/// Loaded directory plus the seed for the initial thread.
#[derive(Debug, Clone)]
pub struct ChatData {
    /// Conversations in display order.
    pub directory: ChatDirectory,
    /// Seed for the initial thread.
    pub messages: Vec<Message>,
}

/// On-disk layout of a data file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataFile {
    #[serde(default)]
    conversations: Vec<Conversation>,
    #[serde(default)]
    messages: Vec<Message>,
}

impl DataSource {
    /// Load the data this source describes.
    ///
    /// # Errors
    ///
    /// File sources fail if the file is missing, unreadable, not valid JSON,
    /// lists the same conversation or message id twice, or uses a message id
    /// that leaves no room for new messages.
    pub fn load(&self) -> Result<ChatData, DataError> {
        match self {
            DataSource::Builtin => Ok(ChatData {
                directory: sample_directory(),
                messages: sample_messages(),
            }),
            DataSource::File(path) => load_data_file(path),
        }
    }
}

/// Pick the data source from the resolved data file setting.
pub fn detect_data_source(path: Option<PathBuf>) -> DataSource {
    match path {
        Some(path) => DataSource::File(path),
        None => DataSource::Builtin,
    }
}

/// Read and validate a JSON data file.
pub fn load_data_file(path: &Path) -> Result<ChatData, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file: DataFile = serde_json::from_str(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let directory = ChatDirectory::new(file.conversations)?;
    check_message_ids(&file.messages)?;
    info!(
        path = %path.display(),
        conversations = directory.len(),
        messages = file.messages.len(),
        "Loaded chat data file"
    );

    Ok(ChatData {
        directory,
        messages: file.messages,
    })
}

/// Seed message ids must be unique and leave room for the messages the
/// composer appends after them.
fn check_message_ids(messages: &[Message]) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(messages.len());
    for message in messages {
        if !seen.insert(message.id) {
            return Err(DataError::DuplicateMessage(message.id));
        }
        if message.id.next().is_none() {
            return Err(DataError::MessageIdOverflow(message.id));
        }
    }
    Ok(())
}
