//! Post models across the draft → formatted → scheduled lifecycle.

use serde::{Deserialize, Serialize};

use super::{Asset, Daypart, Platform};

/// Raw platform copy before formatting rules are applied.
///
/// Ephemeral: a draft is consumed by the formatter immediately after
/// generation and never stored in the pipeline state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostDraft {
    /// Platform the copy was written for
    pub platform: Platform,

    /// Body text, before hashtags are appended
    pub text: String,

    /// Hashtags to append, in order
    #[serde(default)]
    pub hashtags: Vec<String>,

    /// Emoji markers used in the body
    #[serde(default)]
    pub emoji: Vec<String>,
}

/// A draft after platform length/shape rules, with its visual attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedPost {
    /// Platform the post will publish on
    pub platform: Platform,

    /// Final text; satisfies the platform's length constraint
    pub text: String,

    /// The day-slot's visual asset
    pub media: Asset,
}

/// Slot metadata carried on a scheduled post.
///
/// Always copied from the plan item the post was bound to, never derived
/// from the post itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    /// Content theme of the slot
    pub theme: String,

    /// 0-based day index of the slot
    pub day_index: u32,

    /// Time-of-day bucket of the slot
    pub daypart: Daypart,
}

/// The terminal, exportable entity: a post bound to a publish timestamp.
///
/// Serializes with the compatibility field names (`mediaUrl`, `dayIndex`)
/// expected by downstream consumers of the exported schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    /// Campaign name the post belongs to
    pub campaign: String,

    /// Platform the post publishes on
    pub platform: Platform,

    /// Final post text
    pub text: String,

    /// Locator of the attached visual
    pub media_url: String,

    /// Timezone-aware ISO-8601 publish timestamp
    pub timestamp: String,

    /// Slot metadata (theme, day index, daypart)
    pub meta: PostMeta,
}
