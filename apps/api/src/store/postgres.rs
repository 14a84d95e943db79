use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::models::{Campaign, CampaignId, CampaignStatus, Creator, CreatorId};
use crate::models::campaign::{CampaignRow, CAMPAIGN_COLUMNS};
use crate::models::creator::{CreatorRow, CREATOR_COLUMNS};
use crate::store::CandidateStore;

/// Reads creators and campaigns from the marketplace's PostgreSQL tables.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn get_creator(&self, id: CreatorId) -> Result<Option<Creator>, AppError> {
        let row = sqlx::query_as::<_, CreatorRow>(&format!(
            "SELECT {CREATOR_COLUMNS} FROM creators WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Creator::from))
    }

    async fn get_campaign(&self, id: CampaignId) -> Result<Option<Campaign>, AppError> {
        let row = sqlx::query_as::<_, CampaignRow>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Campaign::from))
    }

    async fn list_creators(&self) -> Result<Vec<Creator>, AppError> {
        let rows = sqlx::query_as::<_, CreatorRow>(&format!(
            "SELECT {CREATOR_COLUMNS} FROM creators ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} creators", rows.len());
        Ok(rows.into_iter().map(Creator::from).collect())
    }

    async fn list_campaigns_by_status(
        &self,
        status: CampaignStatus,
    ) -> Result<Vec<Campaign>, AppError> {
        let rows = sqlx::query_as::<_, CampaignRow>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE status = $1 ORDER BY id"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} {} campaigns", rows.len(), status.as_str());
        Ok(rows.into_iter().map(Campaign::from).collect())
    }
}
