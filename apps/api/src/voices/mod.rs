//! Brand-voice lookup — pluggable, trait-based read path for voice profiles.
//!
//! Default: `PgBrandVoiceStore` (single-row SELECT against the managed
//! Postgres backend). Tests swap in in-memory implementations.
//!
//! `AppState` holds an `Arc<dyn BrandVoiceStore>`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::brand_voice::BrandVoiceRow;
use crate::prompts::BrandVoiceProfile;

/// Read-only access to brand-voice profiles. Implement this to swap the
/// backing store without touching the generation pipeline.
#[async_trait]
pub trait BrandVoiceStore: Send + Sync {
    /// Fetches a profile by id. `Ok(None)` means the row does not exist;
    /// callers treat that as "generate without a brand voice". Store errors
    /// propagate.
    async fn fetch_profile(&self, id: Uuid) -> Result<Option<BrandVoiceProfile>, AppError>;
}

/// Postgres-backed store reading the `brand_voices` table.
pub struct PgBrandVoiceStore {
    pool: PgPool,
}

impl PgBrandVoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandVoiceStore for PgBrandVoiceStore {
    async fn fetch_profile(&self, id: Uuid) -> Result<Option<BrandVoiceProfile>, AppError> {
        let row = sqlx::query_as::<_, BrandVoiceRow>("SELECT * FROM brand_voices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BrandVoiceProfile::from))
    }
}
