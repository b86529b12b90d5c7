use crate::{AssignmentType, Result as CoreErrorResult, RfiReplyDto, RfiStatus, RfiUserRef};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// RFI DTO as returned by the RFI service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfiDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: RfiStatus,
    pub priority: String,
    pub project_code: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub created_at: String,
    pub created_by: RfiUserRef,
    #[serde(default)]
    pub resolved_by: Option<RfiUserRef>,

    // Assignment
    #[serde(default)]
    pub assigned_type: Option<String>,
    /// E-mail for user assignments, group name for group assignments
    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub replies: Vec<RfiReplyDto>,
}

impl RfiDto {
    pub fn is_resolved(&self) -> bool {
        self.status == RfiStatus::Resolved
    }

    /// Parsed `assigned_type`, if the service reported one
    pub fn assignment_type(&self) -> Option<CoreErrorResult<AssignmentType>> {
        self.assigned_type.as_deref().map(AssignmentType::from_str)
    }
}
