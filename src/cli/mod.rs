//! CLI module for Coffer
//!
//! Provides the `serve` subcommand that runs the API server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Coffer - JWT-secured account service
#[derive(Parser)]
#[command(name = "coffer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
