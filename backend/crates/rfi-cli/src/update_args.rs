use crate::{CliClientResult, ClientError};

use rfi_core::{RfiStatus, UpdateRfiRequest};

use clap::Args;
use uuid::Uuid;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// RFI ID (UUID)
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New priority label
    #[arg(long)]
    pub priority: Option<String>,

    /// New status: PENDING or RESOLVED
    #[arg(long)]
    pub status: Option<RfiStatus>,

    /// New due date (ISO-8601 date-time, e.g. 2024-07-01T00:00:00)
    #[arg(long)]
    pub due_date: Option<String>,

    /// E-mail of the new assignee
    #[arg(long)]
    pub assigned_to_email: Option<String>,
}

impl UpdateArgs {
    pub fn into_request(self) -> CliClientResult<(Uuid, UpdateRfiRequest)> {
        let request = UpdateRfiRequest {
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
            assigned_to_email: self.assigned_to_email,
        };

        if request.is_empty() {
            return Err(ClientError::usage("nothing to update: pass at least one field flag"));
        }

        Ok((self.id, request))
    }
}
