//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for campaign planning
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "campaign".to_string(),
        description: "Phrase and run a content campaign using Cadence's MCP tools".to_string(),
        template: r#"You are **Cadence Planner**, expert at turning product announcements into content campaigns.

# Product
{product}

# Your Task
Plan and schedule a content campaign for this product using Cadence's MCP tools.

# Step 1: Phrase the Campaign Description
Write a single-sentence campaign description that names everything the brief extractor looks for:
- The product, after "for a/an/the" ("...for a new AI writing tool...")
- A day count ("7-day")
- A tone: playful, professional, inspiring, conversational, or authoritative
- The audience (e.g. "focused on creators and marketers")
- A start date ("Start 2025-08-11") and a timezone ("in Asia/Karachi")

Example:
"Run a 7-day product launch campaign for a new AI writing tool focused on creators and marketers. Tone inspiring. Start 2025-08-11 in Asia/Karachi."

# Step 2: Check the Interpretation
Call `parse_brief` with your description and verify the extracted name, tone, days, start date, and timezone match your intent. Adjust the wording and re-check if not.

# Step 3: Preview the Calendar
Call `preview_calendar` to see the day-by-day slots (date, theme, platforms, daypart). Confirm the campaign length and start date look right.

# Step 4: Run the Campaign
Call `run_campaign` (set export_csv=true if a spreadsheet is wanted). Review the returned schedule and report the publish timestamps and artifact paths to the user.

## Notes
- Dates must be real calendar dates in YYYY-MM-DD form; day counts must be 1-30. Invalid values fail rather than being guessed at.
- Without a start date the campaign begins tomorrow in its timezone."#
            .to_string(),
        arguments: vec![PromptTemplateArg {
            name: "product".to_string(),
            description: "The product or announcement to build the campaign around".to_string(),
            required: true,
        }],
    }]
}
