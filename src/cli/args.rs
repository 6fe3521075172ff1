//! CLI argument definitions using clap
//!
//! Commands:
//! - greffe serve [--port <port>] [--public-dir <dir>] [--env <environment>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::Environment;

/// greffe - In-memory REST backend for a court-of-appeal citizen portal
#[derive(Parser, Debug)]
#[command(name = "greffe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to bind to (the PORT environment variable takes precedence)
        #[arg(long)]
        port: Option<u16>,

        /// Directory of built frontend assets to serve for non-API paths
        #[arg(long)]
        public_dir: Option<PathBuf>,

        /// Run environment
        #[arg(long, value_enum, default_value_t = Environment::Production)]
        env: Environment,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
