//! CLI command definitions for the `mergington` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod activity;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use mergington_types::config::ServiceConfig;

/// Mergington High School extracurricular activity signups.
#[derive(Parser)]
#[command(name = "mergington", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config.toml (defaults to the data directory's config.toml).
    #[arg(long, global = true, env = "MERGINGTON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Directory served under /static.
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Accept signups past an activity's max_participants.
        #[arg(long)]
        allow_overbooking: bool,
    },

    /// List the seeded activities.
    #[command(alias = "ls")]
    List,

    /// Show details of one seeded activity.
    Show {
        /// Activity name, e.g. "Chess Club".
        name: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Merge `serve` flags over the values loaded from config.toml.
///
/// Flags that were not given leave the file value in place.
pub fn apply_serve_overrides(
    config: &mut ServiceConfig,
    port: Option<u16>,
    host: Option<String>,
    static_dir: Option<PathBuf>,
    allow_overbooking: bool,
) {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(dir) = static_dir {
        config.static_dir = dir;
    }
    if allow_overbooking {
        config.enforce_capacity = false;
    }
}
