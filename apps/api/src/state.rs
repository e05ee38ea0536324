use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::voices::BrandVoiceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable brand-voice read path. Default: PgBrandVoiceStore.
    pub voices: Arc<dyn BrandVoiceStore>,
    #[allow(dead_code)]
    pub config: Config,
}
