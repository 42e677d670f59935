//! MCP server implementation for Cadence
//!
//! This module implements the Model Context Protocol server for Cadence,
//! providing a standardized interface for AI models to plan and schedule
//! content campaigns.

use std::sync::Arc;

use anyhow::Result;
use cadence_core::{Exporter, Pipeline};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{McpResult, ParseBrief, PreviewCalendar, RunCampaign};

/// MCP server for Cadence
#[derive(Clone)]
pub struct CadenceMcpServer {
    pipeline: Arc<Pipeline>,
    exporter: Exporter,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CadenceMcpServer {
    /// Create a new Cadence MCP server
    pub fn new(pipeline: Pipeline, exporter: Exporter) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            exporter,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.pipeline.clone(), self.exporter.clone())
    }

    #[tool(
        name = "run_campaign",
        description = "Plan and schedule a complete content campaign from a free-form description. Extracts a structured brief (name, tone, days, timezone, start date), builds a day-by-day calendar, attaches a visual per day, drafts and formats platform-specific posts, and assigns timezone-aware publish timestamps. Exports the schedule as a JSON artifact (and CSV with export_csv=true) and returns the full schedule."
    )]
    async fn run_campaign(&self, params: Parameters<RunCampaign>) -> McpResult {
        self.handlers().run_campaign(params).await
    }

    #[tool(
        name = "preview_calendar",
        description = "Preview how a campaign description will be planned without generating any posts. Returns the extracted brief and the day-by-day calendar (date, theme, platforms, daypart per slot). Use this to check prompt interpretation before running the full pipeline."
    )]
    async fn preview_calendar(&self, params: Parameters<PreviewCalendar>) -> McpResult {
        self.handlers().preview_calendar(params).await
    }

    #[tool(
        name = "parse_brief",
        description = "Extract the structured campaign brief from a free-form description: campaign name, goal, audience, tone, start date, day count, and timezone. Fails with a validation error on malformed dates, out-of-range day counts, or unknown timezones rather than guessing."
    )]
    async fn parse_brief(&self, params: Parameters<ParseBrief>) -> McpResult {
        self.handlers().parse_brief(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CadenceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "cadence".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Cadence turns a free-form campaign description into a multi-day, multi-platform content schedule.

## Core Concepts
- **Brief**: structured campaign parameters (name, goal, audience, tone, start date, days, timezone) extracted from the description
- **Calendar**: one slot per day with a rotating theme, platform set, and daypart
- **Schedule**: finished posts bound to slots with timezone-aware publish timestamps

## Workflow
1. Use `parse_brief` to check how a description will be interpreted
2. Use `preview_calendar` to see the planned day-slots
3. Use `run_campaign` to execute the full pipeline and export the schedule

## Prompt Tips
- Name the product after "for a/an/the" ("...for a new AI writing tool...")
- Include a day count ("7-day"), a tone (playful, professional, inspiring, conversational, authoritative), a start date (YYYY-MM-DD), and a timezone ("in Asia/Karachi")
- Fields left out fall back to defaults (7 days, professional tone)"#
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CadenceMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Cadence MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
