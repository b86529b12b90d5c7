//! rfi - RFI service CLI
//!
//! # Examples
//!
//! ```bash
//! # Create an RFI
//! rfi create --title "Need spec clarification" --description "Please clarify section 4" \
//!     --priority High --project-code PRJ-100
//!
//! # Check a payload without sending it
//! rfi check request.json --pretty
//!
//! # Resolve
//! rfi resolve <id> --message "Answered on site"
//! ```

use rfi_cli::{cli::Cli, logger};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let result = cli.command.execute(&config.client).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
