//! Command-line interface definitions using clap
//!
//! This module defines the CLI argument structures using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic: each command has an
//! `*Args` struct carrying clap-specific attributes and a `From` conversion
//! into the framework-free core parameter type it wraps.

use anyhow::Result;
use cadence_core::{
    display::{Calendar, RunResult},
    export::{DEFAULT_CSV_FILE, DEFAULT_JSON_FILE},
    params::{ParseBrief, PreviewCalendar, RunCampaign},
    Exporter, Pipeline,
};
use clap::Args;

use crate::renderer::TerminalRenderer;

/// Run a campaign end to end
///
/// Executes every pipeline stage (brief extraction, calendar planning,
/// asset acquisition, copy generation, formatting, scheduling) and exports
/// the finished schedule as JSON (always) and CSV (on request).
#[derive(Args)]
pub struct RunArgs {
    /// Free-form campaign description to plan from
    pub prompt: String,
    /// Also export the schedule as CSV
    #[arg(long, help = "Also export the schedule as CSV next to the JSON artifact")]
    pub csv: bool,
    /// Filename for the JSON artifact
    #[arg(long, help = "Override the JSON artifact filename")]
    pub json_file: Option<String>,
    /// Filename for the CSV artifact
    #[arg(long, help = "Override the CSV artifact filename")]
    pub csv_file: Option<String>,
}

impl From<RunArgs> for RunCampaign {
    fn from(val: RunArgs) -> Self {
        RunCampaign {
            prompt: val.prompt,
            export_csv: val.csv,
            json_file: val.json_file,
            csv_file: val.csv_file,
        }
    }
}

/// Preview the content calendar for a prompt
///
/// Runs brief extraction and calendar planning only, no assets, copy, or
/// schedule, and renders the resulting day-slots. Useful for checking how
/// a prompt will be interpreted before a full run.
#[derive(Args)]
pub struct PreviewArgs {
    /// Free-form campaign description to plan from
    pub prompt: String,
}

impl From<PreviewArgs> for PreviewCalendar {
    fn from(val: PreviewArgs) -> Self {
        PreviewCalendar { prompt: val.prompt }
    }
}

/// Show the structured brief extracted from a prompt
#[derive(Args)]
pub struct BriefArgs {
    /// Free-form campaign description to parse
    pub prompt: String,
}

impl From<BriefArgs> for ParseBrief {
    fn from(val: BriefArgs) -> Self {
        ParseBrief { prompt: val.prompt }
    }
}

/// CLI command dispatcher owning the pipeline, exporter, and renderer.
pub struct Cli {
    pipeline: Pipeline,
    exporter: Exporter,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(pipeline: Pipeline, exporter: Exporter, renderer: TerminalRenderer) -> Self {
        Self {
            pipeline,
            exporter,
            renderer,
        }
    }

    /// Execute a full campaign run and export its schedule.
    pub async fn run(&self, params: RunCampaign) -> Result<()> {
        let state = self.pipeline.run(&params.prompt).await?;

        let json_file = params.json_file.as_deref().unwrap_or(DEFAULT_JSON_FILE);
        let json_path = self.exporter.write_json(&state.schedule, json_file)?;
        let csv_path = if params.export_csv {
            let csv_file = params.csv_file.as_deref().unwrap_or(DEFAULT_CSV_FILE);
            Some(self.exporter.write_csv(&state.schedule, csv_file)?)
        } else {
            None
        };

        let result = RunResult::new(&state, json_path, csv_path);
        self.renderer.render(&result.to_string())
    }

    /// Render the planned calendar for a prompt.
    pub fn preview(&self, params: PreviewCalendar) -> Result<()> {
        let (brief, plan) = self.pipeline.preview(&params.prompt)?;
        let output = format!(
            "# Calendar: {} ({} days)\n\n{}",
            brief.name,
            plan.len(),
            Calendar(&plan)
        );
        self.renderer.render(&output)
    }

    /// Render the structured brief extracted from a prompt.
    pub fn brief(&self, params: ParseBrief) -> Result<()> {
        let brief = self.pipeline.parse(&params.prompt)?;
        self.renderer.render(&brief.to_string())
    }
}
