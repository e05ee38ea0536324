// User-prompt templates for the Generation module.
// System-prompt text lives in crate::prompts; these templates only frame the
// source material and pin the JSON envelope the variant parser expects.

/// Template for post generation (idea, url, and rss sources).
///
/// Placeholders:
/// - {source_context}: source framing built by `source::source_context`
/// - {length_guidance}: target word count from `PostLength::guidance`
pub const POST_PROMPT_TEMPLATE: &str = r#"{source_context}

{length_guidance}

Generate 2 different LinkedIn post variations. Each should take a unique approach while maintaining the core message.

IMPORTANT: Return your response as valid JSON in this exact format:
{
  "posts": [
    {
      "content": "The full post content here",
      "hook": "The opening line/hook used",
      "approach": "Brief 5-10 word description of the approach taken"
    },
    {
      "content": "The second post variation here",
      "hook": "The opening line/hook for this version",
      "approach": "Brief 5-10 word description"
    }
  ]
}"#;

/// Template for comment generation. Comments get a character budget instead
/// of a word count, plus quality rules that keep them out of "Great post!"
/// territory.
pub const COMMENT_PROMPT_TEMPLATE: &str = r#"{source_context}

{length_guidance}

Generate 2 different comment variations. Each should:
- Add genuine value to the conversation
- Be concise and punchy (300-500 characters max each)
- Avoid generic phrases like "Great post!" or "Thanks for sharing!"
- Share a unique insight, ask a thoughtful question, or add a relevant personal experience
- Sound natural and conversational, not salesy or self-promotional

IMPORTANT: Return your response as valid JSON in this exact format:
{
  "posts": [
    {
      "content": "The full comment text here (300-500 chars)",
      "hook": "The opening phrase",
      "approach": "Brief 5-10 word description of the approach"
    },
    {
      "content": "The second comment variation here (300-500 chars)",
      "hook": "The opening phrase",
      "approach": "Brief 5-10 word description"
    }
  ]
}"#;

/// Template for edit requests. Edits return exactly one variation and carry
/// no length guidance; the instruction inside {source_context} governs the
/// rewrite.
pub const EDIT_PROMPT_TEMPLATE: &str = r#"{source_context}

IMPORTANT: Return your response as valid JSON in this exact format:
{
  "posts": [
    {
      "content": "The edited post content here",
      "hook": "The opening line",
      "approach": "Edited version"
    }
  ]
}"#;

/// Length guidance used for comment sources in place of a word count.
pub const COMMENT_LENGTH_RULE: &str = "CRITICAL: Keep each comment CONCISE - between 300-500 characters total (not words). Comments should be punchy and add value quickly. No filler text.";

/// Fallback instruction when an edit request names the custom action but
/// supplies no instruction text.
pub const DEFAULT_EDIT_INSTRUCTION: &str = "Improve this post.";
