//! Parameter structures for Cadence operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! or dependencies. Interface layers wrap these in their own types (clap
//! `*Args` structs in the CLI, schema-carrying wrappers in the MCP server)
//! and convert via `From`/accessors, so the core types stay free of
//! framework concerns while each interface adds its own.
//!
//! The optional `schema` feature adds `schemars::JsonSchema` derives for
//! interfaces that need JSON schema generation (the MCP server).

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for a full campaign run.
///
/// Executes every pipeline stage and exports the resulting schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RunCampaign {
    /// Free-form campaign description to plan from (required)
    pub prompt: String,
    /// Also export the schedule as CSV next to the JSON artifact
    #[serde(default)]
    pub export_csv: bool,
    /// Override the JSON artifact filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_file: Option<String>,
    /// Override the CSV artifact filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_file: Option<String>,
}

/// Parameters for previewing a campaign's content calendar.
///
/// Runs intake and planning only; no assets, copy, or schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PreviewCalendar {
    /// Free-form campaign description to plan from (required)
    pub prompt: String,
}

/// Parameters for extracting a structured brief from a prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ParseBrief {
    /// Free-form campaign description to parse (required)
    pub prompt: String,
}
