use serde::{Deserialize, Serialize};

const STATUS_SUCCESS: &str = "success";

/// Response wrapper used by every RFI endpoint:
/// `{ "status": "success" | "error", "message": ..., "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
