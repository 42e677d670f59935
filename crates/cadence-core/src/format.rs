//! Platform formatting rules: draft + asset → finished post.

use crate::models::{Asset, FormattedPost, PostDraft, Platform};

/// Hard character cap for short-form ("x") posts.
pub const X_MAX_CHARS: usize = 280;

/// Apply the platform's length/shape rules to a draft.
///
/// Hashtags are appended space-joined after a blank line when present; with
/// no hashtags the text is unchanged. For [`Platform::X`] the combined text
/// is capped at [`X_MAX_CHARS`] characters: an over-long post is truncated
/// to one character under the cap and closed with a single ellipsis, so the
/// result is exactly the cap. Long-form platforms have no cap.
///
/// Lengths are counted in `char`s, so truncation never splits a code point.
pub fn apply_platform_rules(draft: PostDraft, asset: &Asset) -> FormattedPost {
    let tags = if draft.hashtags.is_empty() {
        String::new()
    } else {
        format!("\n\n{}", draft.hashtags.join(" "))
    };

    let full = format!("{}{}", draft.text, tags);
    let text = match draft.platform {
        Platform::X => truncate_with_ellipsis(full, X_MAX_CHARS),
        Platform::Linkedin | Platform::Instagram => full,
    };

    FormattedPost {
        platform: draft.platform,
        text,
        media: asset.clone(),
    }
}

fn truncate_with_ellipsis(text: String, cap: usize) -> String {
    if text.chars().count() <= cap {
        return text;
    }
    let mut truncated: String = text.chars().take(cap - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> Asset {
        Asset {
            id: "asset_test".to_string(),
            url: "https://placehold.co/1200x675?text=test".to_string(),
            prompt: "test".to_string(),
        }
    }

    fn draft(platform: Platform, text: &str, hashtags: &[&str]) -> PostDraft {
        PostDraft {
            platform,
            text: text.to_string(),
            hashtags: hashtags.iter().map(|t| (*t).to_string()).collect(),
            emoji: vec![],
        }
    }

    #[test]
    fn test_hashtags_appended_after_blank_line() {
        let post = apply_platform_rules(draft(Platform::Linkedin, "Body", &["#a", "#b"]), &asset());
        assert_eq!(post.text, "Body\n\n#a #b");
    }

    #[test]
    fn test_no_hashtags_leaves_text_unchanged() {
        let post = apply_platform_rules(draft(Platform::X, "Just the body", &[]), &asset());
        assert_eq!(post.text, "Just the body");
    }

    #[test]
    fn test_x_truncates_at_cap_with_ellipsis() {
        let long = "a".repeat(400);
        let post = apply_platform_rules(draft(Platform::X, &long, &["#tag"]), &asset());
        assert_eq!(post.text.chars().count(), X_MAX_CHARS);
        assert!(post.text.ends_with('…'));
    }

    #[test]
    fn test_x_at_cap_is_not_truncated() {
        let exact = "b".repeat(X_MAX_CHARS);
        let post = apply_platform_rules(draft(Platform::X, &exact, &[]), &asset());
        assert_eq!(post.text, exact);
    }

    #[test]
    fn test_x_truncation_counts_chars_not_bytes() {
        // Multi-byte chars must not trip the cap early or split.
        let emoji_text = "🚀".repeat(300);
        let post = apply_platform_rules(draft(Platform::X, &emoji_text, &[]), &asset());
        assert_eq!(post.text.chars().count(), X_MAX_CHARS);
        assert!(post.text.ends_with('…'));
    }

    #[test]
    fn test_long_form_has_no_cap() {
        let long = "c".repeat(5000);
        let post = apply_platform_rules(draft(Platform::Instagram, &long, &["#tag"]), &asset());
        assert!(post.text.chars().count() > X_MAX_CHARS);
        assert!(!post.text.contains('…'));
    }

    #[test]
    fn test_asset_attached_unchanged() {
        let a = asset();
        let post = apply_platform_rules(draft(Platform::X, "Body", &[]), &a);
        assert_eq!(post.media, a);
    }
}
