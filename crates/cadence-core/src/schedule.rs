//! Scheduling: formatted posts → timestamped schedule entries.
//!
//! Formatted posts arrive as a flat list produced by walking the plan day
//! by day and each day's platforms in order, but a post does not carry the
//! identity of the slot that produced it. The scheduler re-associates the
//! two by partitioning posts into one FIFO queue per platform and consuming
//! queue heads while walking the plan in the same order. Because the queues
//! preserve generation order and consumption follows increasing day
//! indices, a platform's posts land on non-decreasing days and no slot's
//! date is ever handed out twice, which is the failure mode a naive
//! index-based zip has when not every day includes every platform.

use std::collections::{HashMap, VecDeque};

use jiff::{civil::Date, tz::TimeZone};

use crate::error::{CampaignError, Result};
use crate::models::{Daypart, FormattedPost, PlanItem, Platform, PostMeta, ScheduledPost};

/// Bind formatted posts to plan slots and compute publish timestamps.
///
/// Posts are consumed first-generated-first-scheduled per platform. A slot
/// whose platform queue is empty is skipped silently: deliberate
/// under-production, not an error. Posts left in a queue when the plan is
/// exhausted are dropped the same way.
///
/// # Errors
///
/// * `CampaignError::Timezone` - the supplied timezone is not a known IANA
///   zone
/// * `CampaignError::DateArithmetic` - a slot's date/time cannot be
///   localized
pub fn schedule(
    campaign: &str,
    plan: &[PlanItem],
    posts: Vec<FormattedPost>,
    timezone: &str,
) -> Result<Vec<ScheduledPost>> {
    let tz = TimeZone::get(timezone).map_err(|e| CampaignError::timezone(timezone, e))?;

    // Stable bucket-by-key: per-platform queues in generation order.
    let mut queues: HashMap<Platform, VecDeque<FormattedPost>> = HashMap::new();
    for post in posts {
        queues.entry(post.platform).or_default().push_back(post);
    }

    let mut scheduled = Vec::new();
    for item in plan {
        for &platform in &item.platforms {
            let Some(post) = queues.get_mut(&platform).and_then(VecDeque::pop_front) else {
                continue;
            };
            scheduled.push(ScheduledPost {
                campaign: campaign.to_string(),
                platform,
                text: post.text,
                media_url: post.media.url,
                timestamp: publish_timestamp(item.date, item.daypart, &tz)?,
                meta: PostMeta {
                    theme: item.theme.clone(),
                    day_index: item.day_index,
                    daypart: item.daypart,
                },
            });
        }
    }
    Ok(scheduled)
}

/// Timezone-aware ISO-8601 timestamp for a slot: its date at the daypart's
/// fixed clock time, localized to `tz`.
pub fn publish_timestamp(date: Date, daypart: Daypart, tz: &TimeZone) -> Result<String> {
    let zoned = date
        .to_datetime(daypart.publish_time())
        .to_zoned(tz.clone())
        .map_err(|e| CampaignError::DateArithmetic {
            message: format!("cannot localize {date} at {}", daypart.as_str()),
            source: e,
        })?;
    Ok(zoned.strftime("%Y-%m-%dT%H:%M:%S%:z").to_string())
}
