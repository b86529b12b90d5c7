use crate::RfiUserRef;

use serde::{Deserialize, Serialize};

/// Reply DTO for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfiReplyDto {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub created_by: RfiUserRef,
}
