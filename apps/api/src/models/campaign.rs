use serde_json::Value;
use sqlx::FromRow;

use crate::matching::models::{Campaign, CampaignStatus};
use crate::models::decode_jsonb;

/// Row shape of `campaigns` as selected by the candidate store.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignRow {
    pub id: i32,
    pub requirements: Option<Value>,
    pub budget: Option<Value>,
    pub platforms: Option<Value>,
    pub status: Option<String>,
}

pub const CAMPAIGN_COLUMNS: &str = "id, requirements, budget, platforms, status";

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        let id = row.id;
        Campaign {
            id,
            requirements: decode_jsonb("campaigns", id, "requirements", row.requirements),
            budget: decode_jsonb("campaigns", id, "budget", row.budget),
            platforms: decode_jsonb("campaigns", id, "platforms", row.platforms),
            // Column default is 'draft'.
            status: row
                .status
                .as_deref()
                .map(CampaignStatus::from)
                .unwrap_or(CampaignStatus::Draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(status: Option<&str>) -> CampaignRow {
        CampaignRow {
            id: 9,
            requirements: None,
            budget: None,
            platforms: None,
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Campaign::from(row(Some("active"))).status, CampaignStatus::Active);
        assert_eq!(Campaign::from(row(None)).status, CampaignStatus::Draft);
        assert_eq!(Campaign::from(row(Some("archived"))).status, CampaignStatus::Unknown);
    }

    #[test]
    fn test_requirements_decoded_from_front_end_json() {
        let campaign = Campaign::from(CampaignRow {
            requirements: Some(json!({
                "niche": "fitness",
                "minFollowers": 5000,
                "platforms": ["instagram"]
            })),
            budget: Some(json!({ "min": 200, "max": 800 })),
            ..row(Some("active"))
        });
        assert!(campaign.is_active());
        assert_eq!(campaign.target_platforms(), Some(&["instagram".to_string()][..]));
        assert_eq!(campaign.budget.unwrap().ceiling(), 800.0);
    }

    #[test]
    fn test_partial_budget_row_still_decodes() {
        let campaign = Campaign::from(CampaignRow {
            budget: Some(json!({ "min": 500 })),
            ..row(Some("active"))
        });
        let budget = campaign.budget.expect("budget");
        assert_eq!(budget.floor(), 500.0);
        assert_eq!(budget.ceiling(), f64::INFINITY);
    }

    #[test]
    fn test_malformed_jsonb_keeps_the_campaign() {
        let campaign = Campaign::from(CampaignRow {
            requirements: Some(json!("fitness only")),
            budget: Some(json!({ "min": "500" })),
            platforms: Some(json!(["instagram", 3])),
            ..row(Some("active"))
        });
        assert!(campaign.requirements.is_none());
        assert!(campaign.budget.is_none());
        assert!(campaign.platforms.is_none());
        assert!(campaign.is_active());
    }
}
