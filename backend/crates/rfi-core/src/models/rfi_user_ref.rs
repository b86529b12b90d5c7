use serde::{Deserialize, Serialize};

/// Reduced user record embedded in RFI responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfiUserRef {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
}
