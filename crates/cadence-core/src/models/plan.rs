//! Calendar plan models: platforms, dayparts, and day-slots.

use std::str::FromStr;

use jiff::civil::{time, Date, Time};
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of publishing platforms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Short-form microblogging, hard 280-character cap
    X,

    /// Long-form professional network
    Linkedin,

    /// Image-caption network
    Instagram,
}

impl Platform {
    /// All platforms the pipeline can schedule for.
    pub const ALL: [Platform; 3] = [Platform::X, Platform::Linkedin, Platform::Instagram];

    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Platform::X),
            "linkedin" => Ok(Platform::Linkedin),
            "instagram" => Ok(Platform::Instagram),
            _ => Err(format!("Invalid platform: {s}")),
        }
    }
}

/// Coarse time-of-day bucket mapped to a fixed publish time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    /// Publishes at 09:00 local time
    Morning,

    /// Publishes at 12:30 local time
    Noon,

    /// Publishes at 18:00 local time
    Evening,
}

impl Daypart {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Daypart::Morning => "morning",
            Daypart::Noon => "noon",
            Daypart::Evening => "evening",
        }
    }

    /// The fixed wall-clock time this daypart publishes at.
    pub fn publish_time(&self) -> Time {
        match self {
            Daypart::Morning => time(9, 0, 0, 0),
            Daypart::Noon => time(12, 30, 0, 0),
            Daypart::Evening => time(18, 0, 0, 0),
        }
    }
}

impl FromStr for Daypart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Daypart::Morning),
            "noon" => Ok(Daypart::Noon),
            "evening" => Ok(Daypart::Evening),
            _ => Err(format!("Invalid daypart: {s}")),
        }
    }
}

/// One calendar day's content assignment.
///
/// The planner emits exactly one item per day index, contiguous from zero,
/// with theme, platform set, and daypart fully determined by that index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    /// 0-based position within the campaign; unique and contiguous
    pub day_index: u32,

    /// Calendar date of the slot (start date + day_index days)
    pub date: Date,

    /// Content theme drawn from the rotating theme set
    pub theme: String,

    /// Platforms receiving content on this day, in publish order; never empty
    pub platforms: Vec<Platform>,

    /// Time-of-day bucket for every post on this day
    pub daypart: Daypart,
}
