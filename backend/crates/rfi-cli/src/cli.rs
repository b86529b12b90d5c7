use crate::commands::Commands;

use rfi_config::{Config, ConfigErrorResult};

use clap::Parser;

#[derive(Parser)]
#[command(name = "rfi")]
#[command(about = "Create and manage RFIs (Requests For Information)")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides RFI_SERVER_URL and config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Bearer token (overrides RFI_TOKEN and config.toml)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// Config file and env first, then command-line flags on top.
    ///
    /// The `[client]` section is only validated for commands that call the server.
    pub fn load_config(&self) -> ConfigErrorResult<Config> {
        let mut config = Config::load()?;

        if let Some(ref server) = self.server {
            config.client.server_url = server.clone();
        }
        if let Some(ref token) = self.token {
            config.client.token = Some(token.clone());
        }

        if self.command.needs_server() {
            config.validate()?;
        } else {
            config.validate_logging()?;
        }
        Ok(config)
    }
}
