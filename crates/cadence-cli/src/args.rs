use std::path::PathBuf;

use cadence_core::ProviderKind;
use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::{BriefArgs, PreviewArgs, RunArgs};

/// Main command-line interface for the Cadence campaign scheduler
///
/// Cadence turns a free-form campaign description into a multi-day,
/// multi-platform content schedule: it extracts a structured brief, plans a
/// content calendar, attaches a visual per day, drafts and formats
/// platform-specific copy, and assigns each post a timezone-aware publish
/// timestamp. Schedules export as JSON and CSV artifacts, and an MCP server
/// mode exposes the same pipeline to AI assistants.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Directory for exported schedules and rendered images. Defaults to
    /// $XDG_DATA_HOME/cadence/artifacts
    #[arg(long, global = true)]
    pub artifacts_dir: Option<PathBuf>,

    /// Asset provider to attach visuals with
    #[arg(long, global = true, value_enum, default_value = "placeholder")]
    pub provider: ProviderArg,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cadence CLI
///
/// The CLI is organized into four commands:
/// - `run`: execute the full pipeline and export the schedule
/// - `preview`: plan the content calendar without generating posts
/// - `brief`: show the structured brief extracted from a prompt
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Run a campaign end to end and export the schedule
    #[command(alias = "r")]
    Run(RunArgs),
    /// Preview the content calendar for a prompt
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Show the structured brief extracted from a prompt
    #[command(alias = "b")]
    Brief(BriefArgs),
    /// Start the MCP server
    Serve,
}

/// Command-line argument representation of asset provider selection
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Deterministic placeholder card URLs
    Placeholder,
    /// SVG cards rendered under the artifacts directory
    Local,
}

impl From<ProviderArg> for ProviderKind {
    fn from(val: ProviderArg) -> Self {
        match val {
            ProviderArg::Placeholder => ProviderKind::Placeholder,
            ProviderArg::Local => ProviderKind::LocalImage,
        }
    }
}
