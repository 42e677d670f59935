//! Error handling utilities for MCP server

use cadence_core::CampaignError;
use rmcp::ErrorData;

/// Helper to convert pipeline errors to MCP errors
pub fn to_mcp_error(message: &str, error: &CampaignError) -> ErrorData {
    ErrorData::internal_error(format!("{}: {}", message, error), None)
}
