//! Cadence CLI Application
//!
//! Command-line interface for the Cadence content campaign scheduler.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{Exporter, PipelineBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, CadenceMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        artifacts_dir,
        provider,
        no_color,
        command,
    } = Args::parse();

    let pipeline = PipelineBuilder::new()
        .with_provider(provider.into())
        .with_artifacts_dir(artifacts_dir)
        .build()
        .context("Failed to initialize pipeline")?;
    let exporter = Exporter::new(pipeline.config().artifacts_dir.clone());

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cadence started");

    match command {
        Run(args) => Cli::new(pipeline, exporter, renderer).run(args.into()).await,
        Preview(args) => Cli::new(pipeline, exporter, renderer).preview(args.into()),
        Brief(args) => Cli::new(pipeline, exporter, renderer).brief(args.into()),
        Serve => {
            info!("Starting Cadence MCP server");
            run_stdio_server(CadenceMcpServer::new(pipeline, exporter))
                .await
                .context("MCP server failed")
        }
    }
}
