//! MCP tool handlers implementation

use std::sync::Arc;

use cadence_core::{
    display::{Calendar, RunResult},
    export::{DEFAULT_CSV_FILE, DEFAULT_JSON_FILE},
    params as core,
    Exporter, Pipeline,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Wraps any core parameter type in a transparent serde container, adding
/// the MCP-specific derives (Deserialize, JsonSchema) for JSON handling
/// while keeping the core types clean of framework dependencies.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type RunCampaign = McpParams<core::RunCampaign>;
pub type PreviewCalendar = McpParams<core::PreviewCalendar>;
pub type ParseBrief = McpParams<core::ParseBrief>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    pipeline: Arc<Pipeline>,
    exporter: Exporter,
}

impl McpHandlers {
    pub fn new(pipeline: Arc<Pipeline>, exporter: Exporter) -> Self {
        Self { pipeline, exporter }
    }

    pub async fn run_campaign(&self, Parameters(params): Parameters<RunCampaign>) -> McpResult {
        debug!("run_campaign: {:?}", params);

        let inner_params = params.as_ref();
        let state = self
            .pipeline
            .run(&inner_params.prompt)
            .await
            .map_err(|e| to_mcp_error("Failed to run campaign", &e))?;

        let json_file = inner_params
            .json_file
            .as_deref()
            .unwrap_or(DEFAULT_JSON_FILE);
        let json_path = self
            .exporter
            .write_json(&state.schedule, json_file)
            .map_err(|e| to_mcp_error("Failed to export schedule", &e))?;
        let csv_path = if inner_params.export_csv {
            let csv_file = inner_params.csv_file.as_deref().unwrap_or(DEFAULT_CSV_FILE);
            Some(
                self.exporter
                    .write_csv(&state.schedule, csv_file)
                    .map_err(|e| to_mcp_error("Failed to export schedule", &e))?,
            )
        } else {
            None
        };

        let result = RunResult::new(&state, json_path, csv_path);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn preview_calendar(
        &self,
        Parameters(params): Parameters<PreviewCalendar>,
    ) -> McpResult {
        debug!("preview_calendar: {:?}", params);

        let (brief, plan) = self
            .pipeline
            .preview(&params.as_ref().prompt)
            .map_err(|e| to_mcp_error("Failed to preview calendar", &e))?;

        let result = format!(
            "# Calendar: {} ({} days)\n\n{}",
            brief.name,
            plan.len(),
            Calendar(&plan)
        );
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn parse_brief(&self, Parameters(params): Parameters<ParseBrief>) -> McpResult {
        debug!("parse_brief: {:?}", params);

        let brief = self
            .pipeline
            .parse(&params.as_ref().prompt)
            .map_err(|e| to_mcp_error("Failed to parse brief", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            brief.to_string(),
        )]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                title: None,
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
