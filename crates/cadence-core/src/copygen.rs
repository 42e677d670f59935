//! Copy generation: platform-specific draft text per day-slot.
//!
//! Pure templates: a draft is a function of the brief, theme, platform,
//! and date, with no side effects. The wording here is replaceable content;
//! the [`PostDraft`] shape it produces is the contract the formatter
//! depends on.

use jiff::civil::Date;
use log::debug;

use crate::models::{CampaignBrief, Platform, PostDraft};

const BASE_CTA: &str = "Try it free today";

/// Default hashtag set per platform.
pub fn default_hashtags(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::X => &["#AI", "#Writing", "#Creators"],
        Platform::Linkedin => &["#Marketing", "#ProductLaunch", "#AIWriting"],
        Platform::Instagram => &["#AIWriting", "#CreatorTools", "#ContentStrategy"],
    }
}

/// Generate the draft for one (day-slot, platform) pair.
pub fn generate_post(
    brief: &CampaignBrief,
    theme: &str,
    platform: Platform,
    date: Date,
) -> PostDraft {
    debug!(
        "drafting {} copy for theme '{theme}' on {date}",
        platform.as_str()
    );
    let hashtags = default_hashtags(platform)
        .iter()
        .map(|t| (*t).to_string())
        .collect();

    match platform {
        Platform::X => PostDraft {
            platform,
            text: format!(
                "🚀 {}: {}. Built for {}. {BASE_CTA} → link in bio ({date})",
                brief.name, brief.goal, brief.audience
            ),
            hashtags,
            emoji: vec!["🚀".to_string()],
        },
        Platform::Linkedin => PostDraft {
            platform,
            text: format!(
                "✨ {} — {}\n\nFor {}. {} tone.\n• Draft faster\n• Keep brand voice\n• Collaborate\n\n📈 {BASE_CTA}: visit our site. ({date})",
                brief.name,
                brief.goal,
                brief.audience,
                capitalize(brief.tone.as_str())
            ),
            hashtags,
            emoji: vec!["✨".to_string(), "📈".to_string()],
        },
        Platform::Instagram => PostDraft {
            platform,
            text: format!(
                "🎨 {} is here! {}.\nMade for {}. ⚡ {BASE_CTA}. ({date})",
                brief.name, brief.goal, brief.audience
            ),
            hashtags,
            emoji: vec!["🎨".to_string(), "⚡".to_string()],
        },
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
