//! Post generation — orchestrates the full pipeline.
//!
//! Flow: validate → resolve brand voice → assemble system directive →
//!       build user prompt → LLM call → lenient variant parse → respond.
//!
//! Nothing is persisted here; the dashboard owns storage of accepted drafts.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::source::{
    build_user_prompt, source_context, EditAction, PostLength, SourceType,
};
use crate::llm_client::{LlmClient, Usage};
use crate::prompts::viral::EngagementGoal;
use crate::prompts::{build_system_prompt, StyleSelection};
use crate::voices::BrandVoiceStore;

/// Sentinel the dashboard sends when no brand voice is selected.
const NO_BRAND_VOICE: &str = "none";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for post generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePostRequest {
    pub source_type: SourceType,
    pub content: String,
    pub url: Option<String>,
    pub user_angle: Option<String>,
    pub format: Option<String>,
    #[serde(default)]
    pub tones: Vec<String>,
    #[serde(default)]
    pub angles: Vec<String>,
    /// `"none"` or a brand-voice row UUID.
    pub brand_voice_id: Option<String>,
    #[serde(default)]
    pub length: PostLength,
    #[serde(default)]
    pub viral_mode: bool,
    pub viral_angle: Option<String>,
    pub engagement_goal: Option<EngagementGoal>,
    pub edit_action: Option<EditAction>,
    pub custom_instruction: Option<String>,
}

/// One generated variation. Posts and comments come back in pairs; edits
/// return a single variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostVariant {
    pub content: String,
    pub hook: String,
    pub approach: String,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePostResponse {
    pub posts: Vec<PostVariant>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
struct VariantEnvelope {
    posts: Vec<PostVariant>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline for one request.
///
/// Steps:
/// 1. Validate content is non-empty
/// 2. resolve_brand_voice() → Option<BrandVoiceProfile>
/// 3. build_system_prompt() → system directive
/// 4. source_context() + build_user_prompt() → user prompt
/// 5. One LLM call
/// 6. parse_variants() — never fails; degrades to raw text
pub async fn generate_post(
    voices: &dyn BrandVoiceStore,
    llm: &LlmClient,
    request: GeneratePostRequest,
) -> Result<GeneratePostResponse, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let brand_voice = resolve_brand_voice(voices, request.brand_voice_id.as_deref()).await?;

    let selection = StyleSelection {
        format: request.format.clone(),
        tones: request.tones.clone(),
        angles: request.angles.clone(),
        brand_voice,
        viral_mode: request.viral_mode,
        viral_angle: request.viral_angle.clone(),
        engagement_goal: request.engagement_goal,
    };
    let system = build_system_prompt(&selection);

    let context = source_context(
        request.source_type,
        &request.content,
        request.url.as_deref(),
        request.user_angle.as_deref(),
        request.edit_action,
        request.custom_instruction.as_deref(),
    );
    let user_prompt = build_user_prompt(request.source_type, &context, request.length);

    info!(
        "Generating {:?} content: {} tones, {} angles, brand_voice={}",
        request.source_type,
        selection.tones.len(),
        selection.angles.len(),
        selection.brand_voice.is_some()
    );

    let response = llm
        .call(&user_prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Generation LLM call failed: {e}")))?;

    let posts = parse_variants(response.text().unwrap_or_default());

    Ok(GeneratePostResponse {
        posts,
        usage: response.usage,
    })
}

/// Resolves the request's brand-voice id to a profile.
///
/// Absent ids and the `"none"` sentinel mean no brand voice; a well-formed id
/// whose row is missing degrades the same way. Malformed ids are a caller
/// bug and are rejected.
async fn resolve_brand_voice(
    voices: &dyn BrandVoiceStore,
    brand_voice_id: Option<&str>,
) -> Result<Option<crate::prompts::BrandVoiceProfile>, AppError> {
    let id = match brand_voice_id {
        Some(id) if id != NO_BRAND_VOICE => id,
        _ => return Ok(None),
    };

    let id = Uuid::parse_str(id)
        .map_err(|_| AppError::Validation(format!("Invalid brand_voice_id: {id}")))?;

    let profile = voices.fetch_profile(id).await?;
    if profile.is_none() {
        warn!("Brand voice {id} not found; generating without a voice profile");
    }
    Ok(profile)
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient variant parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses the LLM's response into variants. Accepts clean JSON and
/// fence-wrapped JSON; anything else becomes a single variant whose content
/// is the raw text and whose hook is its first line. Never errors.
fn parse_variants(text: &str) -> Vec<PostVariant> {
    let stripped = strip_json_fences(text);

    if let Ok(envelope) = serde_json::from_str::<VariantEnvelope>(stripped) {
        return envelope.posts;
    }

    warn!("LLM response was not the expected JSON envelope; using raw text");
    vec![PostVariant {
        content: text.to_string(),
        hook: text.lines().next().unwrap_or_default().to_string(),
        approach: "Generated content".to_string(),
    }]
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::BrandVoiceProfile;
    use async_trait::async_trait;

    struct StubStore {
        profile: Option<BrandVoiceProfile>,
    }

    #[async_trait]
    impl BrandVoiceStore for StubStore {
        async fn fetch_profile(&self, _id: Uuid) -> Result<Option<BrandVoiceProfile>, AppError> {
            Ok(self.profile.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl BrandVoiceStore for FailingStore {
        async fn fetch_profile(&self, _id: Uuid) -> Result<Option<BrandVoiceProfile>, AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let json = serde_json::json!({
            "source_type": "idea",
            "content": "remote work is underrated"
        });
        let request: GeneratePostRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.source_type, SourceType::Idea);
        assert!(request.tones.is_empty());
        assert!(request.angles.is_empty());
        assert_eq!(request.length, PostLength::Medium);
        assert!(!request.viral_mode);
        assert!(request.brand_voice_id.is_none());
    }

    #[test]
    fn test_request_deserializes_full_body() {
        let json = serde_json::json!({
            "source_type": "edit",
            "content": "My old draft.",
            "format": "Listicles",
            "tones": ["Friendly", "Assertive"],
            "angles": ["Story"],
            "brand_voice_id": "none",
            "length": "Long",
            "viral_mode": true,
            "viral_angle": "Pattern-Interrupt",
            "engagement_goal": "comments",
            "edit_action": "add_hook"
        });
        let request: GeneratePostRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.edit_action, Some(EditAction::AddHook));
        assert_eq!(request.engagement_goal, Some(EngagementGoal::Comments));
        assert_eq!(request.tones, vec!["Friendly", "Assertive"]);
    }

    #[test]
    fn test_parse_variants_clean_json() {
        let text = r#"{"posts": [
            {"content": "Post one", "hook": "Hook one", "approach": "Story-led"},
            {"content": "Post two", "hook": "Hook two", "approach": "Data-led"}
        ]}"#;
        let posts = parse_variants(text);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "Post one");
        assert_eq!(posts[1].approach, "Data-led");
    }

    #[test]
    fn test_parse_variants_fenced_json() {
        let text = "```json\n{\"posts\": [{\"content\": \"Fenced\", \"hook\": \"H\", \"approach\": \"A\"}]}\n```";
        let posts = parse_variants(text);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "Fenced");
    }

    #[test]
    fn test_parse_variants_raw_text_fallback() {
        let text = "This came back as prose.\nSecond line of the post.";
        let posts = parse_variants(text);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, text);
        assert_eq!(posts[0].hook, "This came back as prose.");
        assert_eq!(posts[0].approach, "Generated content");
    }

    #[test]
    fn test_parse_variants_empty_envelope_stays_empty() {
        // A well-formed envelope with no posts is the model's answer, not a
        // parse failure; it passes through without the raw-text fallback.
        let posts = parse_variants(r#"{"posts": []}"#);
        assert!(posts.is_empty());
    }

    #[test]
    fn test_parse_variants_empty_text() {
        let posts = parse_variants("");
        assert_eq!(posts.len(), 1);
        assert!(posts[0].content.is_empty());
        assert!(posts[0].hook.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_brand_voice_skips_none_sentinel() {
        let store = StubStore {
            profile: Some(BrandVoiceProfile {
                name: "Should not load".to_string(),
                ..Default::default()
            }),
        };
        assert!(resolve_brand_voice(&store, None).await.unwrap().is_none());
        assert!(resolve_brand_voice(&store, Some("none"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_resolve_brand_voice_rejects_malformed_id() {
        let store = StubStore { profile: None };
        let result = resolve_brand_voice(&store, Some("not-a-uuid")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_resolve_brand_voice_missing_row_degrades() {
        let store = StubStore { profile: None };
        let id = Uuid::new_v4().to_string();
        let profile = resolve_brand_voice(&store, Some(&id)).await.unwrap();
        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn test_resolve_brand_voice_returns_profile() {
        let store = StubStore {
            profile: Some(BrandVoiceProfile {
                name: "Founder Voice".to_string(),
                ..Default::default()
            }),
        };
        let id = Uuid::new_v4().to_string();
        let profile = resolve_brand_voice(&store, Some(&id)).await.unwrap();
        assert_eq!(profile.unwrap().name, "Founder Voice");
    }

    #[tokio::test]
    async fn test_resolve_brand_voice_propagates_store_errors() {
        let id = Uuid::new_v4().to_string();
        let result = resolve_brand_voice(&FailingStore, Some(&id)).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
