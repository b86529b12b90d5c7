//! rfi-cli library
//!
//! Exports the HTTP client and the command definitions used by the `rfi` binary.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod create_args;
pub mod list_args;
pub mod logger;
pub mod update_args;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
