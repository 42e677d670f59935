//! Calendar planning: brief → ordered day-slots.
//!
//! Theme, platform set, and daypart for a slot are selected by indexing
//! three independent fixed rotations with `day_index mod len`, so coverage
//! cycles deterministically and an identical brief always produces an
//! identical plan.

use jiff::{civil::Date, ToSpan};

use crate::error::{CampaignError, Result};
use crate::models::{CampaignBrief, Daypart, PlanItem, Platform};

/// Rotating content themes, one per day in cycle order.
pub const THEMES: [&str; 7] = [
    "awareness",
    "education",
    "social proof",
    "teaser",
    "behind the scenes",
    "CTA",
    "comparison",
];

/// Rotating time-of-day buckets.
pub const DAYPARTS: [Daypart; 3] = [Daypart::Morning, Daypart::Noon, Daypart::Evening];

/// Which platforms receive content on a given day, cycling.
pub const PLATFORM_ROTATION: [&[Platform]; 2] = [
    &[Platform::X, Platform::Linkedin],
    &[Platform::Instagram, Platform::X],
];

/// Expand a brief into its content calendar, one [`PlanItem`] per day.
///
/// The first slot's date is the brief's start date when given, otherwise
/// tomorrow in the brief's timezone. Validation failures (bad timezone,
/// out-of-range day count) abort before any slot is produced.
///
/// # Errors
///
/// * `CampaignError::InvalidInput` / `CampaignError::Timezone` - brief
///   invariants do not hold
/// * `CampaignError::DateArithmetic` - the campaign would run past the
///   representable calendar range
pub fn generate_calendar(brief: &CampaignBrief) -> Result<Vec<PlanItem>> {
    brief.validate()?;
    let start = match brief.start_date {
        Some(date) => date,
        None => tomorrow_in(brief)?,
    };

    let mut plan = Vec::with_capacity(usize::from(brief.days));
    for day_index in 0..u32::from(brief.days) {
        let offset = day_index as usize;
        let date = start
            .checked_add((day_index as i32).days())
            .map_err(|e| CampaignError::DateArithmetic {
                message: format!("cannot add {day_index} days to {start}"),
                source: e,
            })?;
        plan.push(PlanItem {
            day_index,
            date,
            theme: THEMES[offset % THEMES.len()].to_string(),
            platforms: PLATFORM_ROTATION[offset % PLATFORM_ROTATION.len()].to_vec(),
            daypart: DAYPARTS[offset % DAYPARTS.len()],
        });
    }
    Ok(plan)
}

/// Tomorrow's civil date in the brief's timezone.
fn tomorrow_in(brief: &CampaignBrief) -> Result<Date> {
    let tz = brief.time_zone()?;
    let today = jiff::Timestamp::now().to_zoned(tz).date();
    today.tomorrow().map_err(|e| CampaignError::DateArithmetic {
        message: format!("no day after {today}"),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Tone;

    fn brief(days: u8) -> CampaignBrief {
        CampaignBrief {
            name: "AI writing tool".to_string(),
            goal: "product launch campaign".to_string(),
            audience: "creators".to_string(),
            tone: Tone::Inspiring,
            start_date: Some(date(2025, 8, 11)),
            days,
            timezone: "Asia/Karachi".to_string(),
        }
    }

    #[test]
    fn test_calendar_length_and_contiguity() {
        let plan = generate_calendar(&brief(9)).unwrap();
        assert_eq!(plan.len(), 9);
        for (i, item) in plan.iter().enumerate() {
            assert_eq!(item.day_index, i as u32);
            assert!(!item.platforms.is_empty());
        }
    }

    #[test]
    fn test_calendar_dates_follow_start() {
        let plan = generate_calendar(&brief(5)).unwrap();
        assert_eq!(plan[0].date, date(2025, 8, 11));
        assert_eq!(plan[4].date, date(2025, 8, 15));
    }

    #[test]
    fn test_calendar_rotations_cycle() {
        let plan = generate_calendar(&brief(8)).unwrap();
        assert_eq!(plan[0].theme, "awareness");
        assert_eq!(plan[6].theme, "comparison");
        // Theme rotation wraps after seven days.
        assert_eq!(plan[7].theme, "awareness");

        assert_eq!(plan[0].platforms, vec![Platform::X, Platform::Linkedin]);
        assert_eq!(plan[1].platforms, vec![Platform::Instagram, Platform::X]);
        assert_eq!(plan[2].platforms, plan[0].platforms);

        assert_eq!(plan[0].daypart, Daypart::Morning);
        assert_eq!(plan[1].daypart, Daypart::Noon);
        assert_eq!(plan[2].daypart, Daypart::Evening);
        assert_eq!(plan[3].daypart, Daypart::Morning);
    }

    #[test]
    fn test_calendar_deterministic() {
        let b = brief(12);
        assert_eq!(generate_calendar(&b).unwrap(), generate_calendar(&b).unwrap());
    }

    #[test]
    fn test_calendar_without_start_date_begins_tomorrow() {
        let mut b = brief(2);
        b.start_date = None;
        let plan = generate_calendar(&b).unwrap();
        let tz = b.time_zone().unwrap();
        let today = jiff::Timestamp::now().to_zoned(tz).date();
        assert_eq!(plan[0].date, today.tomorrow().unwrap());
    }

    #[test]
    fn test_calendar_rejects_invalid_timezone_before_planning() {
        let mut b = brief(3);
        b.timezone = "Not/AZone".to_string();
        assert!(generate_calendar(&b).is_err());
    }

    #[test]
    fn test_calendar_rejects_zero_days() {
        assert!(generate_calendar(&brief(0)).is_err());
    }
}
