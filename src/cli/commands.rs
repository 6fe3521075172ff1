//! CLI command implementations
//!
//! `serve` assembles the configuration (CLI flags, then environment variable
//! overrides), constructs the seeded store and schema registry, and blocks on
//! the HTTP server until the process exits.

use std::path::PathBuf;
use std::sync::Arc;

use crate::http_server::{ApiState, Environment, HttpServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            port,
            public_dir,
            env,
        } => serve(port, public_dir, env),
    }
}

/// Boot the HTTP server and enter the serving loop.
pub fn serve(port: Option<u16>, public_dir: Option<PathBuf>, env: Environment) -> CliResult<()> {
    let mut config = ServerConfig::default();
    if let Some(port) = port {
        config.port = port;
    }
    config.public_dir = public_dir;
    config.env = env;
    config.apply_env_overrides();

    let state = Arc::new(ApiState::new());
    let server = HttpServer::with_config(config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime_error(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::serve_failed(format!("Server error: {}", e)))
}
