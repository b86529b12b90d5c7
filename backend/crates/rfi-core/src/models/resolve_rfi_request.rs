use serde::{Deserialize, Serialize};

/// Request body for resolving an RFI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRfiRequest {
    pub message: String,
}

impl ResolveRfiRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
