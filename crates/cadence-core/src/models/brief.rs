//! Campaign brief model and tone vocabulary.

use std::str::FromStr;

use jiff::{civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{CampaignError, Result};

/// Minimum number of campaign days a brief may request.
pub const MIN_DAYS: u8 = 1;

/// Maximum number of campaign days a brief may request.
pub const MAX_DAYS: u8 = 30;

/// Type-safe enumeration of campaign tones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Light, joking voice
    Playful,

    /// Neutral business voice
    #[default]
    Professional,

    /// Motivational voice
    Inspiring,

    /// Casual, second-person voice
    Conversational,

    /// Expert, declarative voice
    Authoritative,
}

impl Tone {
    /// All tones, in the order the brief heuristics scan for them.
    pub const ALL: [Tone; 5] = [
        Tone::Playful,
        Tone::Professional,
        Tone::Inspiring,
        Tone::Conversational,
        Tone::Authoritative,
    ];

    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Playful => "playful",
            Tone::Professional => "professional",
            Tone::Inspiring => "inspiring",
            Tone::Conversational => "conversational",
            Tone::Authoritative => "authoritative",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "playful" => Ok(Tone::Playful),
            "professional" => Ok(Tone::Professional),
            "inspiring" => Ok(Tone::Inspiring),
            "conversational" => Ok(Tone::Conversational),
            "authoritative" => Ok(Tone::Authoritative),
            _ => Err(format!("Invalid tone: {s}")),
        }
    }
}

/// Structured campaign parameters extracted from a free-form prompt.
///
/// A brief is either fully valid or never handed to the rest of the
/// pipeline: the intake boundary calls [`CampaignBrief::validate`] before
/// returning one, and the calendar planner revalidates before producing any
/// slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignBrief {
    /// Campaign name used in copy and export rows
    pub name: String,

    /// What the campaign is trying to achieve
    pub goal: String,

    /// Who the campaign is speaking to
    pub audience: String,

    /// Voice used by the copy templates
    pub tone: Tone,

    /// Explicit first calendar day; when absent, planning starts tomorrow
    /// in the brief's timezone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Number of day-slots to plan, within [`MIN_DAYS`]..=[`MAX_DAYS`]
    pub days: u8,

    /// IANA timezone identifier all publish timestamps are localized to
    pub timezone: String,
}

impl CampaignBrief {
    /// Check the invariants that must hold before planning.
    ///
    /// # Errors
    ///
    /// * `CampaignError::InvalidInput` - day count outside the allowed range
    /// * `CampaignError::Timezone` - timezone does not resolve to an IANA zone
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(CampaignError::invalid_input(
                "days",
                format!(
                    "day count {} out of range {MIN_DAYS}..={MAX_DAYS}",
                    self.days
                ),
            ));
        }
        self.time_zone()?;
        Ok(())
    }

    /// Resolve the brief's timezone identifier to a [`TimeZone`].
    pub fn time_zone(&self) -> Result<TimeZone> {
        TimeZone::get(&self.timezone).map_err(|e| CampaignError::timezone(&self.timezone, e))
    }
}
