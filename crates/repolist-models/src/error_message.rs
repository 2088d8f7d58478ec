use serde::{Deserialize, Serialize};

/// Error payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub status: u16,
    pub message: String,
}

impl ErrorMessage {
    pub fn new<T: Into<String>>(status: u16, message: T) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}
