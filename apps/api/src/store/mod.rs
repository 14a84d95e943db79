//! Candidate store: the data-store boundary the matching handlers read from.
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`; production wires in
//! `PgCandidateStore`, tests use the in-memory store.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::models::{Campaign, CampaignId, CampaignStatus, Creator, CreatorId};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgCandidateStore;

/// Read-only lookups over the current creator and campaign snapshot.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn get_creator(&self, id: CreatorId) -> Result<Option<Creator>, AppError>;

    async fn get_campaign(&self, id: CampaignId) -> Result<Option<Campaign>, AppError>;

    async fn list_creators(&self) -> Result<Vec<Creator>, AppError>;

    async fn list_campaigns_by_status(
        &self,
        status: CampaignStatus,
    ) -> Result<Vec<Campaign>, AppError>;
}
