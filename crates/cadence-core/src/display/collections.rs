//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers provide Display implementations for collections with
//! consistent structure and graceful empty-collection handling.

use std::fmt;

use crate::models::{PlanItem, ScheduledPost};

/// Newtype wrapper for displaying a content calendar.
///
/// Formats each plan item as one markdown list line; empty calendars
/// render a short notice instead.
pub struct Calendar<'a>(pub &'a [PlanItem]);

impl fmt::Display for Calendar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No slots planned.");
        }
        for item in self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a complete schedule.
pub struct Schedule<'a>(pub &'a [ScheduledPost]);

impl Schedule<'_> {
    /// Check if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of scheduled posts.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No posts scheduled.");
        }
        for post in self.0 {
            write!(f, "{post}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Daypart, Platform, PostMeta};
    use jiff::civil::date;

    #[test]
    fn test_empty_calendar_notice() {
        assert_eq!(Calendar(&[]).to_string(), "No slots planned.\n");
    }

    #[test]
    fn test_calendar_lists_each_slot() {
        let plan = vec![PlanItem {
            day_index: 0,
            date: date(2025, 8, 11),
            theme: "awareness".to_string(),
            platforms: vec![Platform::X, Platform::Linkedin],
            daypart: Daypart::Morning,
        }];
        let out = Calendar(&plan).to_string();
        assert!(out.contains("Day 0"));
        assert!(out.contains("2025-08-11"));
        assert!(out.contains("x, linkedin"));
    }

    #[test]
    fn test_empty_schedule_notice() {
        assert_eq!(Schedule(&[]).to_string(), "No posts scheduled.\n");
    }

    #[test]
    fn test_schedule_shows_timestamp_and_text() {
        let schedule = vec![ScheduledPost {
            campaign: "Demo".to_string(),
            platform: Platform::X,
            text: "hello".to_string(),
            media_url: "https://placehold.co/1200x675?text=Demo".to_string(),
            timestamp: "2025-08-11T09:00:00+05:00".to_string(),
            meta: PostMeta {
                theme: "awareness".to_string(),
                day_index: 0,
                daypart: Daypart::Morning,
            },
        }];
        let out = Schedule(&schedule).to_string();
        assert!(out.contains("2025-08-11T09:00:00+05:00"));
        assert!(out.contains("hello"));
    }
}
