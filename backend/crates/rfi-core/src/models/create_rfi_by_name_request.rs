use serde::{Deserialize, Serialize};

/// Create payload as accepted by the RFI service's `POST /api/rfis`.
///
/// Differs from [`crate::CreateRfiRequest`] in addressing the assignee by
/// e-mail rather than username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRfiByNameRequest {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub project_code: String,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_group_name: Option<String>,
}

impl CreateRfiByNameRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        project_code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            project_code: project_code.into(),
            deadline: None,
            assigned_to_email: None,
            assigned_group_name: None,
        }
    }
}
