use crate::create_args::{CreateArgs, CreateBody, read_request_file};
use crate::list_args::{ListArgs, ListScope};
use crate::update_args::UpdateArgs;
use crate::{CliClientResult, Client};

use rfi_config::ClientConfig;
use rfi_core::{Assignee, ResolveRfiRequest};

use std::path::PathBuf;

use clap::Subcommand;
use log::{info, warn};
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new RFI
    Create(CreateArgs),

    /// Check a JSON create request offline and print it normalized
    Check {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Get an RFI by ID
    Get {
        /// RFI ID (UUID)
        id: Uuid,
    },

    /// List RFIs (all visible RFIs unless a filter is given)
    List(ListArgs),

    /// Update an RFI
    Update(UpdateArgs),

    /// Resolve an RFI
    Resolve {
        /// RFI ID (UUID)
        id: Uuid,

        /// Resolution message
        #[arg(long)]
        message: String,
    },

    /// Delete an RFI
    Delete {
        /// RFI ID (UUID)
        id: Uuid,
    },
}

impl Commands {
    /// Whether the command talks to the RFI service (and so needs a valid `[client]` config)
    pub fn needs_server(&self) -> bool {
        !matches!(self, Commands::Check { .. })
    }

    /// Run the command, returning the JSON to print
    pub async fn execute(self, config: &ClientConfig) -> CliClientResult<Value> {
        match self {
            Commands::Check { path } => check(&path),
            Commands::Create(args) => {
                let body = args.into_request()?;
                warn_on_assignee(body.assignee());
                let client = Client::from_config(config)?;
                match body {
                    CreateBody::ByUsername(request) => client.create_rfi(&request).await,
                    CreateBody::ByEmail(request) => client.create_rfi_by_name(&request).await,
                }
            }
            Commands::Get { id } => Client::from_config(config)?.get_rfi(id).await,
            Commands::List(args) => {
                let client = Client::from_config(config)?;
                let (scope, page) = args.into_query();
                match scope {
                    ListScope::Project { code, status } => {
                        client.list_project_rfis(&code, status, &page).await
                    }
                    ListScope::Assigned => client.list_assigned_rfis(&page).await,
                    ListScope::Created => client.list_created_rfis(&page).await,
                    ListScope::Overdue { project_id } => client.list_overdue_rfis(project_id).await,
                    ListScope::All => client.list_all_rfis(&page).await,
                }
            }
            Commands::Update(args) => {
                let (id, request) = args.into_request()?;
                Client::from_config(config)?.update_rfi(id, &request).await
            }
            Commands::Resolve { id, message } => {
                Client::from_config(config)?
                    .resolve_rfi(id, &ResolveRfiRequest::new(message))
                    .await
            }
            Commands::Delete { id } => Client::from_config(config)?.delete_rfi(id).await,
        }
    }
}

/// Parse the file as a create request without contacting the service
pub fn check(path: &std::path::Path) -> CliClientResult<Value> {
    let request = read_request_file(path)?;
    info!("{} is a valid create request", path.display());

    let deadline_parses = request.deadline_date().map(|parsed| parsed.is_ok());

    Ok(json!({
        "valid": true,
        "request": serde_json::to_value(&request)?,
        "deadlineIsIsoDate": deadline_parses,
    }))
}

// Informational only; the service decides which combinations it accepts.
fn warn_on_assignee(assignee: Assignee<'_>) {
    match assignee {
        Assignee::Unassigned => warn!("RFI has no assignee"),
        Assignee::UserAndGroup { user, group } => {
            warn!("RFI names both user '{}' and group '{}'", user, group)
        }
        Assignee::User(_) | Assignee::Group(_) => {}
    }
}
