//! Value types consumed and produced by the matching engine.
//!
//! Field names serialize as snake_case. The camelCase aliases accept the JSONB
//! payloads the marketplace front end writes into `creators` and `campaigns`.

use serde::{Deserialize, Serialize};

pub type CreatorId = i32;
pub type CampaignId = i32;

// ────────────────────────────────────────────────────────────────────────────
// Creator
// ────────────────────────────────────────────────────────────────────────────

/// Per-content-type pricing. Absent or zero prices are unusable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    #[serde(default)]
    pub post: Option<f64>,
    #[serde(default)]
    pub story: Option<f64>,
    #[serde(default)]
    pub reel: Option<f64>,
}

impl Rates {
    /// Representative price used for budget comparison: post, then reel, then story.
    /// Returns 0.0 when none of them is usable.
    pub fn representative(&self) -> f64 {
        [self.post, self.reel, self.story]
            .into_iter()
            .flatten()
            .find(|rate| *rate > 0.0)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub platform: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub engagement: u64,
    #[serde(default)]
    pub reach: u64,
}

impl PortfolioItem {
    /// engagement / reach, with a zero reach counted as a zero ratio.
    pub fn engagement_ratio(&self) -> f64 {
        if self.reach == 0 {
            return 0.0;
        }
        self.engagement as f64 / self.reach as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub niche: String,
    #[serde(default, alias = "totalFollowers")]
    pub total_followers: u64,
    /// Percentage, e.g. 5.4 means 5.4%.
    #[serde(default, alias = "avgEngagementRate")]
    pub avg_engagement_rate: f64,
    #[serde(default, alias = "completedCampaigns")]
    pub completed_campaigns: u32,
    /// 0.0 – 5.0
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rates: Option<Rates>,
    #[serde(default, alias = "socialAccounts")]
    pub social_accounts: Vec<SocialAccount>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default, alias = "isVerified")]
    pub is_verified: bool,
}

impl Creator {
    /// Lowercased platform names of every connected social account.
    pub fn platforms(&self) -> impl Iterator<Item = String> + '_ {
        self.social_accounts
            .iter()
            .map(|account| account.platform.to_lowercase())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Campaign
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Cancelled => "cancelled",
            CampaignStatus::Unknown => "unknown",
        }
    }
}

impl From<&str> for CampaignStatus {
    fn from(value: &str) -> Self {
        match value {
            "draft" => CampaignStatus::Draft,
            "active" => CampaignStatus::Active,
            "paused" => CampaignStatus::Paused,
            "completed" => CampaignStatus::Completed,
            "cancelled" => CampaignStatus::Cancelled,
            _ => CampaignStatus::Unknown,
        }
    }
}

/// Creator requirements attached to a campaign. Every field is optional.
///
/// Zero-valued thresholds and empty platform lists carry no constraint; the
/// accessor methods below apply that normalization so callers never see them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default, alias = "minFollowers")]
    pub min_followers: Option<u64>,
    #[serde(default, alias = "maxFollowers")]
    pub max_followers: Option<u64>,
    #[serde(default, alias = "minEngagement")]
    pub min_engagement: Option<f64>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
}

impl Requirements {
    pub fn niche(&self) -> Option<&str> {
        self.niche
            .as_deref()
            .map(str::trim)
            .filter(|niche| !niche.is_empty())
    }

    pub fn min_followers(&self) -> Option<u64> {
        self.min_followers.filter(|min| *min > 0)
    }

    pub fn max_followers(&self) -> Option<u64> {
        self.max_followers.filter(|max| *max > 0)
    }

    pub fn min_engagement(&self) -> Option<f64> {
        self.min_engagement.filter(|min| *min > 0.0)
    }

    pub fn platforms(&self) -> Option<&[String]> {
        self.platforms.as_deref().filter(|p| !p.is_empty())
    }
}

/// Campaign spend range. An absent `min` is 0, an absent `max` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Budget {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn floor(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn ceiling(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    #[serde(default)]
    pub requirements: Option<Requirements>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default = "default_status")]
    pub status: CampaignStatus,
}

fn default_status() -> CampaignStatus {
    CampaignStatus::Draft
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    /// Platforms the campaign targets: `platforms` whenever it is present,
    /// `requirements.platforms` only when it is absent. An explicit empty
    /// `platforms` list is unconstrained. `None` means unconstrained.
    pub fn target_platforms(&self) -> Option<&[String]> {
        match self.platforms.as_deref() {
            Some(platforms) => Some(platforms).filter(|p| !p.is_empty()),
            None => self.requirements.as_ref().and_then(Requirements::platforms),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Match output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// The seven sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub niche_match: f64,
    pub follower_match: f64,
    pub engagement_match: f64,
    pub platform_match: f64,
    pub budget_match: f64,
    pub experience_match: f64,
    pub quality_match: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub creator_id: CreatorId,
    pub campaign_id: CampaignId,
    /// Weighted sum of the breakdown, rounded to two decimals.
    pub score: f64,
    pub breakdown: MatchBreakdown,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rates_priority_post_then_reel_then_story() {
        let rates = Rates {
            post: Some(300.0),
            story: Some(100.0),
            reel: Some(500.0),
        };
        assert_eq!(rates.representative(), 300.0);

        let rates = Rates {
            post: None,
            story: Some(100.0),
            reel: Some(500.0),
        };
        assert_eq!(rates.representative(), 500.0);

        let rates = Rates {
            post: Some(0.0),
            story: Some(100.0),
            reel: None,
        };
        assert_eq!(rates.representative(), 100.0);

        assert_eq!(Rates::default().representative(), 0.0);
    }

    #[test]
    fn test_zero_reach_ratio_is_zero() {
        let item = PortfolioItem {
            platform: "instagram".to_string(),
            engagement: 120,
            reach: 0,
        };
        assert_eq!(item.engagement_ratio(), 0.0);
    }

    #[test]
    fn test_zero_thresholds_are_no_constraint() {
        let req = Requirements {
            niche: Some("  ".to_string()),
            min_followers: Some(0),
            max_followers: Some(0),
            min_engagement: Some(0.0),
            platforms: Some(vec![]),
        };
        assert!(req.niche().is_none());
        assert!(req.min_followers().is_none());
        assert!(req.max_followers().is_none());
        assert!(req.min_engagement().is_none());
        assert!(req.platforms().is_none());
    }

    #[test]
    fn test_partial_budget_bounds() {
        let budget: Budget = serde_json::from_value(json!({ "min": 500 })).unwrap();
        assert_eq!(budget.floor(), 500.0);
        assert_eq!(budget.ceiling(), f64::INFINITY);

        let budget: Budget = serde_json::from_value(json!({ "max": 800 })).unwrap();
        assert_eq!(budget.floor(), 0.0);
        assert_eq!(budget.ceiling(), 800.0);
    }

    #[test]
    fn test_target_platforms_falls_back_to_requirements() {
        let campaign = Campaign {
            id: 1,
            requirements: Some(Requirements {
                platforms: Some(vec!["TikTok".to_string()]),
                ..Default::default()
            }),
            budget: None,
            platforms: None,
            status: CampaignStatus::Active,
        };
        assert_eq!(campaign.target_platforms(), Some(&["TikTok".to_string()][..]));
    }

    #[test]
    fn test_empty_campaign_platforms_do_not_fall_back() {
        let campaign = Campaign {
            id: 1,
            requirements: Some(Requirements {
                platforms: Some(vec!["TikTok".to_string()]),
                ..Default::default()
            }),
            budget: None,
            platforms: Some(vec![]),
            status: CampaignStatus::Active,
        };
        assert!(campaign.target_platforms().is_none());
    }

    #[test]
    fn test_campaign_platforms_win_over_requirements() {
        let campaign = Campaign {
            id: 1,
            requirements: Some(Requirements {
                platforms: Some(vec!["TikTok".to_string()]),
                ..Default::default()
            }),
            budget: None,
            platforms: Some(vec!["YouTube".to_string()]),
            status: CampaignStatus::Active,
        };
        assert_eq!(campaign.target_platforms(), Some(&["YouTube".to_string()][..]));
    }

    #[test]
    fn test_deserializes_camel_case_front_end_payload() {
        let creator: Creator = serde_json::from_value(json!({
            "id": 7,
            "niche": "Beauty",
            "totalFollowers": 12000,
            "avgEngagementRate": 4.5,
            "completedCampaigns": 3,
            "rating": 4.8,
            "socialAccounts": [{ "platform": "Instagram", "followers": 12000, "verified": true }],
            "isVerified": true
        }))
        .unwrap();
        assert_eq!(creator.total_followers, 12000);
        assert_eq!(creator.social_accounts.len(), 1);
        assert!(creator.rates.is_none());
        assert!(creator.portfolio.is_empty());

        let campaign: Campaign = serde_json::from_value(json!({
            "id": 3,
            "requirements": { "niche": "beauty", "minFollowers": 5000, "ageRange": "18-24" },
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(campaign.requirements.unwrap().min_followers(), Some(5000));
        assert_eq!(campaign.status, CampaignStatus::Unknown);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Confidence::High).unwrap(), json!("high"));
    }
}
