//! CLI module for the six degrees service.
//!
//! Subcommands:
//! - `serve`: Run the HTTP API
//! - `check`: Probe Neo4j connectivity once and exit

mod check;
mod serve;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Public Six Degrees - people connections over the content graph
#[derive(Parser)]
#[command(name = "sixdegrees")]
#[command(about = "Read-only API for connected and most mentioned people")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Neo4j Bolt URI, overrides the configured one
    #[arg(long, global = true, env = "NEO_URL")]
    pub neo4j_uri: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Host address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long, env = "APP_PORT")]
        port: Option<u16>,
    },

    /// Check connectivity to Neo4j and exit
    Check,
}

impl App {
    /// Loads the layered configuration and applies command line overrides.
    pub fn load_config(&self) -> color_eyre::Result<Config> {
        let mut config = Config::load()?;

        if let Some(uri) = &self.neo4j_uri {
            config.neo4j.uri = uri.clone();
        }
        if let Command::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
        Ok(config)
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn log_filter(&self, config: &Config) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            config.server.log_level.clone()
        }
    }

    /// Run the CLI application.
    pub async fn run(self, config: Config) -> color_eyre::Result<()> {
        match self.command {
            Command::Serve { .. } => serve::run(config).await,
            Command::Check => check::run(config).await,
        }
    }
}
