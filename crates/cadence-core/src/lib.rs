//! Core library for the Cadence content campaign scheduler.
//!
//! This crate turns a free-form campaign description into a multi-day,
//! multi-platform content schedule through a fixed six-stage pipeline:
//!
//! 1. **Intake** ([`intake`]): prompt → validated [`CampaignBrief`]
//! 2. **Planning** ([`calendar`]): brief → day-by-day [`PlanItem`] calendar
//! 3. **Assets** ([`assets`]): one visual per day-slot, with a
//!    deterministic placeholder fallback
//! 4. **Copy** ([`copygen`]): one draft per (day-slot, platform) pair
//! 5. **Formatting** ([`format`]): platform length/shape rules
//! 6. **Scheduling** ([`schedule`]): per-platform FIFO matching of posts
//!    back onto calendar slots, with timezone-aware publish timestamps
//!
//! The [`Pipeline`] orchestrates the stages over a single immutable state
//! snapshot; the [`Exporter`] persists the finished schedule as JSON/CSV.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::PipelineBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = PipelineBuilder::new().build()?;
//!
//! let state = pipeline
//!     .run("Run a 7-day product launch campaign for a new AI writing tool. \
//!           Tone inspiring. Start 2025-08-11 in Asia/Karachi.")
//!     .await?;
//!
//! for post in &state.schedule {
//!     println!("{} {} {}", post.timestamp, post.platform, post.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod calendar;
pub mod copygen;
pub mod display;
pub mod error;
pub mod export;
pub mod format;
pub mod intake;
pub mod models;
pub mod params;
pub mod pipeline;
pub mod schedule;

// Re-export commonly used types
pub use assets::{AssetProvider, AssetRegistry, LocalImageProvider, PlaceholderProvider, ProviderKind};
pub use display::{Calendar, RunResult, Schedule};
pub use error::{CampaignError, Result};
pub use export::Exporter;
pub use intake::BriefDefaults;
pub use models::{
    Asset, CampaignBrief, Daypart, FormattedPost, PlanItem, Platform, PostDraft, PostMeta,
    ScheduledPost, Tone,
};
pub use params::{ParseBrief, PreviewCalendar, RunCampaign};
pub use pipeline::{Pipeline, PipelineBuilder, PipelineConfig, PipelineState};
