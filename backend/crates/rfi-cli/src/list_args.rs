use rfi_core::{PageRequest, RfiStatus};

use clap::Args;
use uuid::Uuid;

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only RFIs in this project
    #[arg(long, value_name = "CODE", conflicts_with_all = ["assigned", "created", "overdue"])]
    pub project: Option<String>,

    /// Only RFIs assigned to you (directly or through a group)
    #[arg(long, conflicts_with_all = ["created", "overdue"])]
    pub assigned: bool,

    /// Only RFIs you created
    #[arg(long, conflicts_with = "overdue")]
    pub created: bool,

    /// Only your RFIs past their due date
    #[arg(long)]
    pub overdue: bool,

    /// With --project: only RFIs in this status (PENDING or RESOLVED)
    #[arg(long, requires = "project")]
    pub status: Option<RfiStatus>,

    /// With --overdue: only RFIs of this project (UUID)
    #[arg(long, requires = "overdue")]
    pub project_id: Option<Uuid>,

    /// Zero-based page number
    #[arg(long, conflicts_with = "overdue")]
    pub page: Option<u32>,

    /// Page size
    #[arg(long, conflicts_with = "overdue")]
    pub size: Option<u32>,

    /// Sort order, e.g. "createdAt,desc"
    #[arg(long, conflicts_with = "overdue")]
    pub sort: Option<String>,
}

/// Which listing endpoint a `list` invocation maps to, with its filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    Project {
        code: String,
        status: Option<RfiStatus>,
    },
    Assigned,
    Created,
    Overdue {
        project_id: Option<Uuid>,
    },
    All,
}

impl ListArgs {
    /// Split into the endpoint to call and the paging to send with it
    pub fn into_query(self) -> (ListScope, PageRequest) {
        let page = PageRequest {
            page: self.page,
            size: self.size,
            sort: self.sort,
        };

        let scope = if let Some(code) = self.project {
            ListScope::Project {
                code,
                status: self.status,
            }
        } else if self.assigned {
            ListScope::Assigned
        } else if self.created {
            ListScope::Created
        } else if self.overdue {
            ListScope::Overdue {
                project_id: self.project_id,
            }
        } else {
            ListScope::All
        };

        (scope, page)
    }
}
