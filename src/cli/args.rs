//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// EnvSync - Scan toolchains, detect dependency conflicts, generate a Dockerfile.
#[derive(Debug, Parser)]
#[command(name = "envsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .envsync/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    // `envsync --build --dashboard` without a subcommand
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the environment and write reports (default if no command specified)
    Scan(ScanArgs),

    /// Scan, then serve the live dashboard
    Dashboard(DashboardArgs),

    /// Scan, then write only the Dockerfile
    Dockerfile(DockerfileArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Build the Docker image after the scan
    #[arg(long)]
    pub build: bool,

    /// Launch the dashboard after the scan
    #[arg(long)]
    pub dashboard: bool,
}

/// Arguments for the `dashboard` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DashboardArgs {
    /// Address to bind (overrides dashboard.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides dashboard.port)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for the `dockerfile` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DockerfileArgs {
    /// Build the Docker image after writing the Dockerfile
    #[arg(long)]
    pub build: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the JSON schema of the config file instead
    #[arg(long, conflicts_with = "json")]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
