//! Pipeline orchestration: raw prompt → scheduled posts.
//!
//! The [`Pipeline`] executes the fixed six-stage sequence (parse brief,
//! plan calendar, acquire assets, draft copy, format, schedule) over a
//! single run. Stage order is not configurable; each stage completes before
//! the next begins, and each computes exactly one field of the resulting
//! [`PipelineState`] snapshot. A run either finishes whole or fails on a
//! validation error; there is no partial or resumable execution.
//!
//! Runs are stateless between invocations. Independent runs share no
//! mutable state and may execute concurrently as long as the configured
//! asset provider is safe for concurrent use.

use log::{info, warn};
use serde::Serialize;

use crate::assets::{placeholder_asset, AssetProvider, AssetRegistry};
use crate::calendar::generate_calendar;
use crate::copygen::generate_post;
use crate::error::Result;
use crate::format::apply_platform_rules;
use crate::intake::parse_brief;
use crate::models::{Asset, CampaignBrief, FormattedPost, PlanItem, ScheduledPost};
use crate::schedule::schedule;

pub mod builder;

pub use builder::{PipelineBuilder, PipelineConfig};

/// Snapshot of one pipeline run.
///
/// Grows strictly forward: every field is written once, by the stage that
/// owns it, and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineState {
    /// The raw prompt the run started from
    pub prompt: String,

    /// Structured brief extracted from the prompt
    pub brief: CampaignBrief,

    /// Content calendar, one item per campaign day
    pub plan: Vec<PlanItem>,

    /// Visual assets, in lockstep with `plan` (index = day index)
    pub assets: Vec<Asset>,

    /// Formatted posts in generation order (per day, per platform)
    pub posts: Vec<FormattedPost>,

    /// The terminal schedule, in emission order
    pub schedule: Vec<ScheduledPost>,
}

/// Executes campaign runs against a fixed configuration and asset provider.
///
/// Built via [`PipelineBuilder`]; the provider is chosen once, at
/// construction time.
pub struct Pipeline {
    pub(crate) config: PipelineConfig,
    pub(crate) provider: Box<dyn AssetProvider>,
}

impl Pipeline {
    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parse a prompt into a validated brief without running the pipeline.
    pub fn parse(&self, prompt: &str) -> Result<CampaignBrief> {
        parse_brief(prompt, &self.config.brief_defaults)
    }

    /// Parse a prompt and expand its content calendar, skipping asset and
    /// copy stages.
    pub fn preview(&self, prompt: &str) -> Result<(CampaignBrief, Vec<PlanItem>)> {
        let brief = self.parse(prompt)?;
        let plan = generate_calendar(&brief)?;
        Ok((brief, plan))
    }

    /// Execute a full run: prompt in, complete state snapshot out.
    ///
    /// # Errors
    ///
    /// Validation errors from intake, planning, or scheduling abort the run.
    /// Asset provider failures do not: they degrade to the deterministic
    /// placeholder asset and the run continues.
    pub async fn run(&self, prompt: &str) -> Result<PipelineState> {
        let brief = self.parse(prompt)?;
        info!(
            "campaign '{}': {} days, timezone {}",
            brief.name, brief.days, brief.timezone
        );

        let plan = generate_calendar(&brief)?;
        let assets = self.acquire_assets(&brief, &plan).await;
        let posts = draft_and_format(&brief, &plan, &assets);
        info!(
            "generated {} posts across {} slots",
            posts.len(),
            plan.len()
        );

        let scheduled = schedule(&brief.name, &plan, posts.clone(), &brief.timezone)?;
        info!("scheduled {} posts", scheduled.len());

        Ok(PipelineState {
            prompt: prompt.to_string(),
            brief,
            plan,
            assets,
            posts,
            schedule: scheduled,
        })
    }

    /// Acquire one asset per plan item, in day order.
    ///
    /// Never fails: a provider error is logged and replaced by the
    /// placeholder asset derived from the same prompt.
    async fn acquire_assets(&self, brief: &CampaignBrief, plan: &[PlanItem]) -> Vec<Asset> {
        let mut assets = Vec::with_capacity(plan.len());
        for item in plan {
            let prompt = format!("{} | {} | {}", brief.name, item.theme, brief.audience);
            let asset = match self.provider.create(&prompt).await {
                Ok(asset) => asset,
                Err(e) => {
                    warn!("asset provider failed for day {}: {e}", item.day_index);
                    placeholder_asset(&prompt)
                }
            };
            AssetRegistry::record(&asset);
            assets.push(asset);
        }
        assets
    }
}

/// Draft and format one post per (plan item, platform) pair, in nested
/// day-then-platform order. Drafts are consumed immediately; only formatted
/// posts survive.
fn draft_and_format(
    brief: &CampaignBrief,
    plan: &[PlanItem],
    assets: &[Asset],
) -> Vec<FormattedPost> {
    let mut posts = Vec::new();
    for (item, asset) in plan.iter().zip(assets) {
        for &platform in &item.platforms {
            let draft = generate_post(brief, &item.theme, platform, item.date);
            posts.push(apply_platform_rules(draft, asset));
        }
    }
    posts
}
