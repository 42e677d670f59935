//! Display implementations for domain models.
//!
//! All implementations emit markdown-formatted output for rich terminal
//! display, separated from the model definitions to keep data structures
//! and presentation apart.

use std::fmt;

use crate::models::{CampaignBrief, Daypart, PlanItem, Platform, ScheduledPost, Tone};

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Daypart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CampaignBrief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Goal: {}", self.goal)?;
        writeln!(f, "- Audience: {}", self.audience)?;
        writeln!(f, "- Tone: {}", self.tone)?;
        if let Some(start) = self.start_date {
            writeln!(f, "- Start: {start}")?;
        }
        writeln!(f, "- Days: {}", self.days)?;
        writeln!(f, "- Timezone: {}", self.timezone)?;
        Ok(())
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let platforms = self
            .platforms
            .iter()
            .map(Platform::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            f,
            "- Day {} — {} · {} · {} · {}",
            self.day_index, self.date, self.theme, self.daypart, platforms
        )
    }
}

impl fmt::Display for ScheduledPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {} · {} · {}",
            self.meta.day_index, self.platform, self.timestamp
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)?;
        writeln!(f, "- Theme: {}", self.meta.theme)?;
        writeln!(f, "- Media: {}", self.media_url)?;
        Ok(())
    }
}
