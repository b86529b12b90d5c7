use crate::{Assignee, CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Wire format of `deadline` when a caller wants it as a calendar date
const DEADLINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for creating an RFI
///
/// `title`, `description`, `priority` and `project_code` must be supplied.
/// The remaining fields are independent and may each be absent; nothing in
/// this type rejects any combination of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRfiRequest {
    pub title: String,
    pub description: String,
    /// Free-form label, e.g. "High" or "Urgent"
    pub priority: String,
    pub project_code: String,

    /// Raw due date text, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    // Assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_group_name: Option<String>,
}

impl CreateRfiRequest {
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
            assigned_to_username: None,
            assigned_group_name: None,
        }
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_assigned_to_username(mut self, username: impl Into<String>) -> Self {
        self.assigned_to_username = Some(username.into());
        self
    }

    pub fn with_assigned_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.assigned_group_name = Some(group_name.into());
        self
    }

    /// Parse a JSON payload. Fails if any required field is missing.
    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        let location = Location::caller();
        serde_json::from_str(json).map_err(|source| CoreError::Json {
            source,
            location: ErrorLocation::from(location),
        })
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        let location = Location::caller();
        serde_json::to_string(self).map_err(|source| CoreError::Json {
            source,
            location: ErrorLocation::from(location),
        })
    }

    /// Which assignee fields are populated
    pub fn assignee(&self) -> Assignee<'_> {
        Assignee::from_parts(
            self.assigned_to_username.as_deref(),
            self.assigned_group_name.as_deref(),
        )
    }

    /// Interpret `deadline` as a `YYYY-MM-DD` date, exactly as sent.
    ///
    /// Returns `None` when no deadline was supplied.
    #[track_caller]
    pub fn deadline_date(&self) -> Option<CoreErrorResult<NaiveDate>> {
        let location = Location::caller();
        self.deadline.as_deref().map(|raw| {
            NaiveDate::parse_from_str(raw, DEADLINE_DATE_FORMAT).map_err(|source| {
                CoreError::InvalidDeadline {
                    value: raw.to_string(),
                    source,
                    location: ErrorLocation::from(location),
                }
            })
        })
    }
}
