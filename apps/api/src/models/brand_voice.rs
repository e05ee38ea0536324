use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::prompts::BrandVoiceProfile;

/// A row from the `brand_voices` table. The table's lifecycle (create, edit,
/// delete, default flag) is owned by the dashboard; this service only reads a
/// row by id at generation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandVoiceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_default: bool,
    pub guidelines: Vec<String>,
    pub excluded_terms: Vec<String>,
    pub preferred_terms: Vec<String>,
    pub samples: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BrandVoiceRow> for BrandVoiceProfile {
    fn from(row: BrandVoiceRow) -> Self {
        BrandVoiceProfile {
            name: row.name,
            description: row.description,
            guidelines: row.guidelines,
            excluded_terms: row.excluded_terms,
            preferred_terms: row.preferred_terms,
            samples: row.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row() -> BrandVoiceRow {
        BrandVoiceRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Founder Voice".to_string(),
            description: Some("Direct and unpolished".to_string()),
            is_default: true,
            guidelines: vec!["Short sentences".to_string()],
            excluded_terms: vec!["synergy".to_string()],
            preferred_terms: vec!["shipped".to_string()],
            samples: vec!["We almost shut down in March.".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_to_profile_preserving_fields() {
        let row = make_row();
        let profile: BrandVoiceProfile = row.clone().into();

        assert_eq!(profile.name, row.name);
        assert_eq!(profile.description, row.description);
        assert_eq!(profile.guidelines, row.guidelines);
        assert_eq!(profile.excluded_terms, row.excluded_terms);
        assert_eq!(profile.preferred_terms, row.preferred_terms);
        assert_eq!(profile.samples, row.samples);
    }

    #[test]
    fn test_missing_description_stays_none() {
        let mut row = make_row();
        row.description = None;
        let profile: BrandVoiceProfile = row.into();
        assert!(profile.description.is_none());
    }
}
