use serde_json::Value;
use sqlx::FromRow;

use crate::matching::models::Creator;
use crate::models::{decode_jsonb, decode_jsonb_list};

/// Row shape of `creators` as selected by the candidate store.
/// NUMERIC columns are cast to float8 in SQL; JSONB columns stay untyped
/// until conversion so a malformed value only affects its own row.
#[derive(Debug, Clone, FromRow)]
pub struct CreatorRow {
    pub id: i32,
    pub niche: String,
    pub total_followers: Option<i32>,
    pub avg_engagement_rate: Option<f64>,
    pub completed_campaigns: Option<i32>,
    pub rating: Option<f64>,
    pub rates: Option<Value>,
    pub social_accounts: Option<Value>,
    pub portfolio: Option<Value>,
    pub is_verified: Option<bool>,
}

pub const CREATOR_COLUMNS: &str = "id, niche, total_followers, \
     avg_engagement_rate::float8 AS avg_engagement_rate, completed_campaigns, \
     rating::float8 AS rating, rates, social_accounts, portfolio, is_verified";

impl From<CreatorRow> for Creator {
    fn from(row: CreatorRow) -> Self {
        let id = row.id;
        Creator {
            id,
            niche: row.niche,
            total_followers: row.total_followers.unwrap_or(0).max(0) as u64,
            avg_engagement_rate: row.avg_engagement_rate.unwrap_or(0.0).max(0.0),
            completed_campaigns: row.completed_campaigns.unwrap_or(0).max(0) as u32,
            rating: row.rating.unwrap_or(0.0),
            rates: decode_jsonb("creators", id, "rates", row.rates),
            social_accounts: decode_jsonb_list(
                "creators",
                id,
                "social_accounts",
                row.social_accounts,
            ),
            portfolio: decode_jsonb_list("creators", id, "portfolio", row.portfolio),
            is_verified: row.is_verified.unwrap_or(false),
        }
    }
}
