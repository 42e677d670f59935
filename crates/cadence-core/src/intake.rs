//! Brief intake: free-form prompt → structured [`CampaignBrief`].
//!
//! The extraction is deliberately heuristic (regex scans with sensible
//! defaults) because the prompt vocabulary is replaceable content, not
//! pipeline machinery. What is *not* negotiable is the boundary contract:
//! this module either returns a fully valid brief or fails with a
//! validation error. A malformed start date or an out-of-range day count is
//! never coerced.

use std::str::FromStr;
use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

use crate::error::{CampaignError, Result};
use crate::models::{CampaignBrief, Tone, MAX_DAYS, MIN_DAYS};

/// Timezone assumed when the prompt names none.
pub const DEFAULT_TIMEZONE: &str = "Asia/Karachi";

/// Day count assumed when the prompt names none.
pub const DEFAULT_DAYS: u8 = 7;

/// Fallback values for fields the prompt is silent on.
///
/// Explicitly constructed and passed in; there is no process-wide settings
/// cache behind this.
#[derive(Debug, Clone)]
pub struct BriefDefaults {
    /// IANA timezone used when the prompt names none
    pub timezone: String,
    /// Campaign length used when the prompt names none
    pub days: u8,
}

impl Default for BriefDefaults {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            days: DEFAULT_DAYS,
        }
    }
}

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)for (?:a|an|the)?\s*(?:new\s+)?(?P<name>[^.]+?)(?:\.|,|$)")
        .expect("valid regex")
});

static TONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(playful|professional|inspiring|conversational|authoritative)\b")
        .expect("valid regex")
});

static DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)[- ]?day").expect("valid regex"));

static TIMEZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in\s+([A-Za-z_/]+)").expect("valid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("valid regex"));

static CREATORS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)creators?").expect("valid regex"));

static MARKETERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)marketers?").expect("valid regex"));

static LAUNCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)launch").expect("valid regex"));

/// Extract a validated campaign brief from a free-form prompt.
///
/// # Errors
///
/// * `CampaignError::InvalidInput` - empty prompt, or a day count outside
///   [`MIN_DAYS`]..=[`MAX_DAYS`]
/// * `CampaignError::InvalidDate` - a `YYYY-MM-DD` token that is not a real
///   calendar date
/// * `CampaignError::Timezone` - an extracted (or default) timezone that is
///   not a known IANA zone
pub fn parse_brief(prompt: &str, defaults: &BriefDefaults) -> Result<CampaignBrief> {
    if prompt.trim().is_empty() {
        return Err(CampaignError::invalid_input(
            "prompt",
            "prompt must not be empty",
        ));
    }

    let brief = CampaignBrief {
        name: extract_name(prompt),
        goal: extract_goal(prompt),
        audience: extract_audience(prompt),
        tone: extract_tone(prompt),
        start_date: extract_start_date(prompt)?,
        days: extract_days(prompt, defaults.days)?,
        timezone: extract_timezone(prompt, &defaults.timezone),
    };
    brief.validate()?;
    Ok(brief)
}

fn extract_name(prompt: &str) -> String {
    let mut name = NAME_RE
        .captures(prompt)
        .and_then(|c| c.name("name"))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    if name.is_empty() {
        return "Unnamed Campaign".to_string();
    }

    // Trim the match down when the clause swallowed the word "campaign".
    if name.to_lowercase().contains("campaign") {
        name = name
            .replace("campaign", "")
            .trim_matches([' ', '-', '—', ':', '\t'])
            .to_string();
    }
    if name.is_empty() {
        name = "Unnamed Campaign".to_string();
    }
    name
}

fn extract_tone(prompt: &str) -> Tone {
    let mentioned: Vec<Tone> = TONE_RE
        .find_iter(prompt)
        .filter_map(|m| Tone::from_str(m.as_str()).ok())
        .collect();
    Tone::ALL
        .iter()
        .find(|t| mentioned.contains(t))
        .copied()
        .unwrap_or_default()
}

fn extract_days(prompt: &str, default: u8) -> Result<u8> {
    let Some(m) = DAYS_RE.captures(prompt).and_then(|c| c.get(1)) else {
        return Ok(default);
    };
    let days: u8 = m.as_str().parse().map_err(|_| {
        CampaignError::invalid_input(
            "days",
            format!("day count '{}' out of range {MIN_DAYS}..={MAX_DAYS}", m.as_str()),
        )
    })?;
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(CampaignError::invalid_input(
            "days",
            format!("day count {days} out of range {MIN_DAYS}..={MAX_DAYS}"),
        ));
    }
    Ok(days)
}

fn extract_timezone(prompt: &str, default: &str) -> String {
    TIMEZONE_RE
        .captures_iter(prompt)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .find(|tz| tz.contains('/'))
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

fn extract_start_date(prompt: &str) -> Result<Option<Date>> {
    let Some(m) = DATE_RE.find(prompt) else {
        return Ok(None);
    };
    let date = Date::from_str(m.as_str()).map_err(|e| CampaignError::InvalidDate {
        value: m.as_str().to_string(),
        source: e,
    })?;
    Ok(Some(date))
}

fn extract_audience(prompt: &str) -> String {
    let creators = CREATORS_RE.is_match(prompt);
    let marketers = MARKETERS_RE.is_match(prompt);
    match (creators, marketers) {
        (true, true) => "creators & marketers".to_string(),
        (true, false) => "creators".to_string(),
        (false, true) => "marketers".to_string(),
        (false, false) => "general audience".to_string(),
    }
}

fn extract_goal(prompt: &str) -> String {
    if LAUNCH_RE.is_match(prompt) {
        "product launch campaign".to_string()
    } else {
        "campaign".to_string()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Tone;

    const PROMPT: &str = "Run a 7-day product launch campaign for a new AI writing tool \
                          focused on creators and marketers. Tone inspiring. \
                          Start 2025-08-11 in Asia/Karachi.";

    #[test]
    fn test_parse_brief_full_prompt() {
        let brief = parse_brief(PROMPT, &BriefDefaults::default()).unwrap();
        assert_eq!(brief.days, 7);
        assert_eq!(brief.tone, Tone::Inspiring);
        assert_eq!(brief.timezone, "Asia/Karachi");
        assert_eq!(brief.start_date, Some(date(2025, 8, 11)));
        assert_eq!(brief.audience, "creators & marketers");
        assert_eq!(brief.goal, "product launch campaign");
        assert!(brief.name.contains("AI writing tool"));
    }

    #[test]
    fn test_parse_brief_defaults() {
        let brief = parse_brief(
            "Promote our bakery to the neighborhood",
            &BriefDefaults::default(),
        )
        .unwrap();
        assert_eq!(brief.days, DEFAULT_DAYS);
        assert_eq!(brief.timezone, DEFAULT_TIMEZONE);
        assert_eq!(brief.tone, Tone::Professional);
        assert_eq!(brief.start_date, None);
        assert_eq!(brief.audience, "general audience");
        assert_eq!(brief.goal, "campaign");
    }

    #[test]
    fn test_parse_brief_custom_defaults() {
        let defaults = BriefDefaults {
            timezone: "Europe/Berlin".to_string(),
            days: 3,
        };
        let brief = parse_brief("Promote our bakery", &defaults).unwrap();
        assert_eq!(brief.days, 3);
        assert_eq!(brief.timezone, "Europe/Berlin");
    }

    #[test]
    fn test_parse_brief_empty_prompt() {
        assert!(parse_brief("   ", &BriefDefaults::default()).is_err());
    }

    #[test]
    fn test_parse_brief_days_out_of_range() {
        let err = parse_brief(
            "Run a 45-day campaign for a product",
            &BriefDefaults::default(),
        )
        .unwrap_err();
        match err {
            CampaignError::InvalidInput { field, .. } => assert_eq!(field, "days"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_brief_malformed_date() {
        let err = parse_brief(
            "Launch a product. Start 2025-13-40 in Asia/Karachi.",
            &BriefDefaults::default(),
        )
        .unwrap_err();
        match err {
            CampaignError::InvalidDate { value, .. } => assert_eq!(value, "2025-13-40"),
            other => panic!("Expected InvalidDate error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_brief_unknown_timezone_rejected() {
        let err = parse_brief(
            "Launch a product in Nowhere/Atlantis next week",
            &BriefDefaults::default(),
        )
        .unwrap_err();
        match err {
            CampaignError::Timezone { name, .. } => assert_eq!(name, "Nowhere/Atlantis"),
            other => panic!("Expected Timezone error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_tone_scan_order() {
        // Scan order follows the tone vocabulary, not text position.
        assert_eq!(
            extract_tone("keep it professional yet playful"),
            Tone::Playful
        );
    }

    #[test]
    fn test_extract_timezone_skips_non_zone_words() {
        assert_eq!(
            extract_timezone("post in spring, schedule in America/New_York", "UTC"),
            "America/New_York"
        );
    }

    #[test]
    fn test_extract_name_strips_campaign_suffix() {
        assert_eq!(extract_name("create posts for the spring campaign."), "spring");
    }
}
