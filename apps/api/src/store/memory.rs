use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::models::{Campaign, CampaignId, CampaignStatus, Creator, CreatorId};
use crate::store::CandidateStore;

/// Fixed in-memory snapshot for handler tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub creators: Vec<Creator>,
    pub campaigns: Vec<Campaign>,
}

#[async_trait]
impl CandidateStore for InMemoryStore {
    async fn get_creator(&self, id: CreatorId) -> Result<Option<Creator>, AppError> {
        Ok(self.creators.iter().find(|c| c.id == id).cloned())
    }

    async fn get_campaign(&self, id: CampaignId) -> Result<Option<Campaign>, AppError> {
        Ok(self.campaigns.iter().find(|c| c.id == id).cloned())
    }

    async fn list_creators(&self) -> Result<Vec<Creator>, AppError> {
        Ok(self.creators.clone())
    }

    async fn list_campaigns_by_status(
        &self,
        status: CampaignStatus,
    ) -> Result<Vec<Campaign>, AppError> {
        Ok(self
            .campaigns
            .iter()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: i32, status: CampaignStatus) -> Campaign {
        Campaign {
            id,
            requirements: None,
            budget: None,
            platforms: None,
            status,
        }
    }

    #[tokio::test]
    async fn test_lookup_and_status_filter() {
        let store = InMemoryStore {
            creators: vec![],
            campaigns: vec![
                campaign(1, CampaignStatus::Active),
                campaign(2, CampaignStatus::Draft),
            ],
        };

        assert!(store.get_creator(1).await.unwrap().is_none());
        assert_eq!(store.get_campaign(2).await.unwrap().unwrap().id, 2);

        let active = store
            .list_campaigns_by_status(CampaignStatus::Active)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 1);
    }
}
