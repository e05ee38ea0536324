//! Source material handling for generation requests.
//!
//! Each request names where its raw material came from (a bare idea, a
//! scraped article, an RSS item, a post to comment on, or an existing draft
//! to edit). The source type decides how the material is framed in the user
//! prompt and which response envelope is appended.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{
    COMMENT_LENGTH_RULE, COMMENT_PROMPT_TEMPLATE, DEFAULT_EDIT_INSTRUCTION, EDIT_PROMPT_TEMPLATE,
    POST_PROMPT_TEMPLATE,
};

// ─────────────────────────────────────────────────────────────────────────────
// Source types
// ─────────────────────────────────────────────────────────────────────────────

/// Where the raw material for a generation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Free-form idea typed by the user.
    Idea,
    /// Article the user pasted a link to; `content` holds a summary.
    Url,
    /// Item picked from a subscribed feed.
    Rss,
    /// Someone else's post the user wants to comment on.
    Comment,
    /// Existing draft to rewrite; paired with an [`EditAction`].
    Edit,
}

/// Target length for generated posts. Comments ignore this and use a
/// character budget instead; edits carry no length guidance at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl PostLength {
    pub fn guidance(self) -> &'static str {
        match self {
            PostLength::Short => "Keep the post around 100 words or less.",
            PostLength::Medium => "Aim for around 150-200 words.",
            PostLength::Long => "Write an extended post of 250-350 words.",
        }
    }
}

/// Canned rewrite instructions for edit requests. Unrecognized action names
/// deserialize as `Custom`, which falls back to the caller's instruction
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EditAction {
    Shorten,
    AddHook,
    Professional,
    Emojis,
    AddCta,
    Custom,
}

impl From<String> for EditAction {
    fn from(action: String) -> Self {
        match action.as_str() {
            "shorten" => EditAction::Shorten,
            "add_hook" => EditAction::AddHook,
            "professional" => EditAction::Professional,
            "emojis" => EditAction::Emojis,
            "add_cta" => EditAction::AddCta,
            _ => EditAction::Custom,
        }
    }
}

impl EditAction {
    /// Instruction text for this action. `Custom` uses the caller's text,
    /// falling back to a generic improvement request when it is empty.
    pub fn instruction<'a>(self, custom: Option<&'a str>) -> &'a str {
        match self {
            EditAction::Shorten => {
                "Make this post more concise while keeping the key message. \
                 Remove filler words and unnecessary sentences."
            }
            EditAction::AddHook => {
                "Add a compelling, attention-grabbing opening hook to this post. \
                 The hook should stop the scroll and make people want to read more."
            }
            EditAction::Professional => {
                "Rewrite this post to sound more professional and authoritative \
                 while keeping the core message."
            }
            EditAction::Emojis => {
                "Add relevant emojis throughout the post to make it more engaging \
                 and visually appealing. Don't overdo it - use them strategically."
            }
            EditAction::AddCta => {
                "Add a clear call-to-action at the end of this post. It could be \
                 a question to spark discussion, an invitation to connect, or \
                 asking for people's thoughts."
            }
            EditAction::Custom => match custom {
                Some(text) if !text.trim().is_empty() => text,
                _ => DEFAULT_EDIT_INSTRUCTION,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User prompt assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Builds the source framing block for the user prompt.
///
/// `user_angle` is woven into url, rss, and comment sources when it has
/// content; idea and edit sources ignore it. For edits, the instruction is
/// resolved from `edit_action` and `custom_instruction`.
pub fn source_context(
    source: SourceType,
    content: &str,
    url: Option<&str>,
    user_angle: Option<&str>,
    edit_action: Option<EditAction>,
    custom_instruction: Option<&str>,
) -> String {
    match source {
        SourceType::Idea => {
            format!("Create a LinkedIn post based on this idea:\n\n\"{}\"", content)
        }
        SourceType::Url => {
            let mut context = format!(
                "Create a LinkedIn post inspired by this article:\nURL: {}\nContent/Summary: {}",
                url.unwrap_or_default(),
                content
            );
            append_post_angle(&mut context, user_angle);
            context
        }
        SourceType::Rss => {
            let mut context = format!(
                "Create a LinkedIn post based on this article:\n\n\"{}\"",
                content
            );
            append_post_angle(&mut context, user_angle);
            context
        }
        SourceType::Comment => {
            let mut context = format!(
                "Generate a thoughtful, engaging LinkedIn comment to respond to this post:\n\n\
                 --- ORIGINAL POST ---\n{}\n--- END OF POST ---",
                content
            );
            if let Some(angle) = filled(user_angle) {
                context.push_str(&format!(
                    "\n\nThe user wants to make this point or take this angle in their comment:\n\"{}\"",
                    angle
                ));
            }
            context
        }
        SourceType::Edit => {
            let instruction = edit_action
                .unwrap_or(EditAction::Custom)
                .instruction(custom_instruction);
            format!(
                "Edit and improve this existing LinkedIn post based on the following instruction:\n\n\
                 INSTRUCTION: {}\n\n\
                 --- ORIGINAL POST ---\n{}\n--- END OF POST ---\n\n\
                 Return ONLY the edited post content. Keep the same general structure and message \
                 unless the instruction specifically asks for changes.",
                instruction, content
            )
        }
    }
}

/// Completes the user prompt: source framing plus length guidance plus the
/// JSON envelope matching the source type.
pub fn build_user_prompt(source: SourceType, context: &str, length: PostLength) -> String {
    match source {
        SourceType::Edit => EDIT_PROMPT_TEMPLATE.replace("{source_context}", context),
        SourceType::Comment => COMMENT_PROMPT_TEMPLATE
            .replace("{source_context}", context)
            .replace("{length_guidance}", COMMENT_LENGTH_RULE),
        _ => POST_PROMPT_TEMPLATE
            .replace("{source_context}", context)
            .replace("{length_guidance}", length.guidance()),
    }
}

fn append_post_angle(context: &mut String, user_angle: Option<&str>) {
    if let Some(angle) = filled(user_angle) {
        context.push_str(&format!(
            "\n\nIMPORTANT - The user wants to incorporate this personal angle or perspective:\n\"{}\"\n\n\
             Make sure to weave their perspective into the post.",
            angle
        ));
    }
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_deserializes_lowercase() {
        let source: SourceType = serde_json::from_str("\"idea\"").unwrap();
        assert_eq!(source, SourceType::Idea);
        let source: SourceType = serde_json::from_str("\"rss\"").unwrap();
        assert_eq!(source, SourceType::Rss);
        let source: SourceType = serde_json::from_str("\"edit\"").unwrap();
        assert_eq!(source, SourceType::Edit);

        assert!(serde_json::from_str::<SourceType>("\"Idea\"").is_err());
        assert!(serde_json::from_str::<SourceType>("\"tweet\"").is_err());
    }

    #[test]
    fn test_edit_action_deserializes_snake_case() {
        let action: EditAction = serde_json::from_str("\"add_hook\"").unwrap();
        assert_eq!(action, EditAction::AddHook);
        let action: EditAction = serde_json::from_str("\"add_cta\"").unwrap();
        assert_eq!(action, EditAction::AddCta);
    }

    #[test]
    fn test_unknown_edit_action_falls_back_to_custom() {
        // An unrecognized action name must not reject the request; it takes
        // the custom path and its instruction-text fallback.
        for raw in ["\"addHook\"", "\"rewrite_everything\"", "\"custom\""] {
            let action: EditAction = serde_json::from_str(raw).unwrap();
            assert_eq!(action, EditAction::Custom, "input {raw}");
        }
        assert_eq!(
            EditAction::Custom.instruction(None),
            "Improve this post.",
            "fallback action must resolve to the default instruction"
        );
    }

    #[test]
    fn test_post_length_defaults_to_medium() {
        assert_eq!(PostLength::default(), PostLength::Medium);
        let length: PostLength = serde_json::from_str("\"Short\"").unwrap();
        assert_eq!(length, PostLength::Short);
    }

    #[test]
    fn test_length_guidance_texts() {
        assert_eq!(
            PostLength::Short.guidance(),
            "Keep the post around 100 words or less."
        );
        assert_eq!(PostLength::Medium.guidance(), "Aim for around 150-200 words.");
        assert_eq!(
            PostLength::Long.guidance(),
            "Write an extended post of 250-350 words."
        );
    }

    #[test]
    fn test_idea_context_quotes_content() {
        let context = source_context(
            SourceType::Idea,
            "remote work is underrated",
            None,
            None,
            None,
            None,
        );
        assert_eq!(
            context,
            "Create a LinkedIn post based on this idea:\n\n\"remote work is underrated\""
        );
    }

    #[test]
    fn test_idea_context_ignores_user_angle() {
        let context = source_context(
            SourceType::Idea,
            "an idea",
            None,
            Some("my hot take"),
            None,
            None,
        );
        assert!(
            !context.contains("my hot take"),
            "idea sources must not weave the user angle"
        );
    }

    #[test]
    fn test_url_context_includes_url_and_summary() {
        let context = source_context(
            SourceType::Url,
            "AI summary here",
            Some("https://example.com/article"),
            None,
            None,
            None,
        );
        assert!(context.starts_with("Create a LinkedIn post inspired by this article:"));
        assert!(context.contains("URL: https://example.com/article"));
        assert!(context.contains("Content/Summary: AI summary here"));
    }

    #[test]
    fn test_url_context_weaves_angle() {
        let context = source_context(
            SourceType::Url,
            "summary",
            Some("https://example.com"),
            Some("I lived through this"),
            None,
            None,
        );
        assert!(context.contains(
            "IMPORTANT - The user wants to incorporate this personal angle or perspective:\n\"I lived through this\""
        ));
        assert!(context.ends_with("Make sure to weave their perspective into the post."));
    }

    #[test]
    fn test_blank_angle_is_ignored() {
        let context = source_context(
            SourceType::Rss,
            "article text",
            None,
            Some("   "),
            None,
            None,
        );
        assert!(!context.contains("IMPORTANT - The user wants"));
        assert_eq!(
            context,
            "Create a LinkedIn post based on this article:\n\n\"article text\""
        );
    }

    #[test]
    fn test_comment_context_delimits_original_post() {
        let context = source_context(
            SourceType::Comment,
            "Someone's take on hiring.",
            None,
            Some("push back politely"),
            None,
            None,
        );
        assert!(context.contains("--- ORIGINAL POST ---\nSomeone's take on hiring.\n--- END OF POST ---"));
        assert!(context.contains(
            "The user wants to make this point or take this angle in their comment:\n\"push back politely\""
        ));
    }

    #[test]
    fn test_edit_context_carries_instruction_and_original() {
        let context = source_context(
            SourceType::Edit,
            "My old draft.",
            None,
            None,
            Some(EditAction::Shorten),
            None,
        );
        assert!(context.starts_with(
            "Edit and improve this existing LinkedIn post based on the following instruction:"
        ));
        assert!(context.contains("INSTRUCTION: Make this post more concise"));
        assert!(context.contains("--- ORIGINAL POST ---\nMy old draft.\n--- END OF POST ---"));
        assert!(context.ends_with(
            "unless the instruction specifically asks for changes."
        ));
    }

    #[test]
    fn test_custom_edit_action_uses_caller_text() {
        let instruction = EditAction::Custom.instruction(Some("Make it rhyme"));
        assert_eq!(instruction, "Make it rhyme");
    }

    #[test]
    fn test_custom_edit_action_falls_back_when_empty() {
        assert_eq!(EditAction::Custom.instruction(None), "Improve this post.");
        assert_eq!(EditAction::Custom.instruction(Some("  ")), "Improve this post.");
    }

    #[test]
    fn test_missing_edit_action_defaults_to_custom() {
        let context = source_context(SourceType::Edit, "draft", None, None, None, None);
        assert!(context.contains("INSTRUCTION: Improve this post."));
    }

    #[test]
    fn test_post_prompt_carries_length_guidance_and_envelope() {
        let prompt = build_user_prompt(SourceType::Idea, "CONTEXT", PostLength::Long);
        assert!(prompt.starts_with("CONTEXT\n\n"));
        assert!(prompt.contains("Write an extended post of 250-350 words."));
        assert!(prompt.contains("Generate 2 different LinkedIn post variations."));
        assert!(prompt.contains("Return your response as valid JSON"));
        assert!(prompt.contains("\"posts\": ["));
    }

    #[test]
    fn test_comment_prompt_uses_character_budget() {
        let prompt = build_user_prompt(SourceType::Comment, "CONTEXT", PostLength::Long);
        assert!(prompt.contains(COMMENT_LENGTH_RULE));
        assert!(
            !prompt.contains("250-350 words"),
            "comment prompts must not carry a word-count target"
        );
        assert!(prompt.contains("Generate 2 different comment variations."));
    }

    #[test]
    fn test_edit_prompt_has_no_length_guidance() {
        let prompt = build_user_prompt(SourceType::Edit, "CONTEXT", PostLength::Short);
        assert!(!prompt.contains("100 words"));
        assert!(!prompt.contains("{length_guidance}"));
        assert!(prompt.contains("\"approach\": \"Edited version\""));
    }

    #[test]
    fn test_no_unresolved_placeholders() {
        for source in [SourceType::Idea, SourceType::Comment, SourceType::Edit] {
            let prompt = build_user_prompt(source, "CONTEXT", PostLength::Medium);
            assert!(
                !prompt.contains("{source_context}") && !prompt.contains("{length_guidance}"),
                "unresolved placeholder in {:?} prompt",
                source
            );
        }
    }
}
