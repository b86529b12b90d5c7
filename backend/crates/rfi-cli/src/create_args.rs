use crate::{CliClientResult, ClientError};

use rfi_core::{Assignee, CreateRfiByNameRequest, CreateRfiRequest};

use std::path::{Path, PathBuf};

use clap::Args;

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Read the request body from a JSON file instead of flags
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = [
            "title",
            "description",
            "priority",
            "project_code",
            "deadline",
            "assigned_to_username",
            "assigned_to_email",
            "assigned_group_name",
        ]
    )]
    pub from_file: Option<PathBuf>,

    /// Short name of the RFI
    #[arg(long, required_unless_present = "from_file")]
    pub title: Option<String>,

    /// Full explanatory body
    #[arg(long, required_unless_present = "from_file")]
    pub description: Option<String>,

    /// Priority label, e.g. Low, High, Urgent
    #[arg(long, required_unless_present = "from_file")]
    pub priority: Option<String>,

    /// Code of the owning project
    #[arg(long, required_unless_present = "from_file")]
    pub project_code: Option<String>,

    /// Due date, passed through as given (the service expects YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,

    /// Username of the person to assign
    #[arg(long)]
    pub assigned_to_username: Option<String>,

    /// E-mail of the person to assign (sends the by-e-mail create body)
    #[arg(long, conflicts_with = "assigned_to_username")]
    pub assigned_to_email: Option<String>,

    /// Name of the group to assign
    #[arg(long)]
    pub assigned_group_name: Option<String>,
}

/// The create body to POST: by username, or by e-mail when `--assigned-to-email` is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateBody {
    ByUsername(CreateRfiRequest),
    ByEmail(CreateRfiByNameRequest),
}

impl CreateBody {
    pub fn assignee(&self) -> Assignee<'_> {
        match self {
            Self::ByUsername(request) => request.assignee(),
            Self::ByEmail(request) => Assignee::from_parts(
                request.assigned_to_email.as_deref(),
                request.assigned_group_name.as_deref(),
            ),
        }
    }
}

impl CreateArgs {
    /// Build the request body from either the JSON file or the flags
    pub fn into_request(self) -> CliClientResult<CreateBody> {
        if let Some(path) = self.from_file {
            return Ok(CreateBody::ByUsername(read_request_file(&path)?));
        }

        let (Some(title), Some(description), Some(priority), Some(project_code)) =
            (self.title, self.description, self.priority, self.project_code)
        else {
            return Err(ClientError::usage(
                "--title, --description, --priority and --project-code are required",
            ));
        };

        if let Some(email) = self.assigned_to_email {
            if self.assigned_to_username.is_some() {
                return Err(ClientError::usage(
                    "--assigned-to-email and --assigned-to-username are mutually exclusive",
                ));
            }

            let mut request =
                CreateRfiByNameRequest::new(title, description, priority, project_code);
            request.deadline = self.deadline;
            request.assigned_to_email = Some(email);
            request.assigned_group_name = self.assigned_group_name;
            return Ok(CreateBody::ByEmail(request));
        }

        let mut request = CreateRfiRequest::new(title, description, priority, project_code);
        request.deadline = self.deadline;
        request.assigned_to_username = self.assigned_to_username;
        request.assigned_group_name = self.assigned_group_name;

        Ok(CreateBody::ByUsername(request))
    }
}

/// Parse a JSON file as a create request. Fails if a required field is missing.
pub fn read_request_file(path: &Path) -> CliClientResult<CreateRfiRequest> {
    let contents = std::fs::read_to_string(path).map_err(|e| ClientError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(CreateRfiRequest::from_json(&contents)?)
}
