#![allow(dead_code)]

//! Creator ⇄ campaign compatibility scoring.
//!
//! Seven independent sub-scores, each normalized to [0, 1], combined with fixed
//! weights into a single score rounded to two decimals. Missing optional data
//! maps to a fixed default sub-score, never to an error. Pure and stateless:
//! safe to call from any number of tasks at once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::models::{Campaign, Confidence, Creator, MatchBreakdown, MatchScore};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub niche: f64,
    pub follower: f64,
    pub engagement: f64,
    pub platform: f64,
    pub budget: f64,
    pub experience: f64,
    pub quality: f64,
}

pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    niche: 0.25,
    follower: 0.20,
    engagement: 0.15,
    platform: 0.15,
    budget: 0.10,
    experience: 0.10,
    quality: 0.05,
};

impl Default for MatchWeights {
    fn default() -> Self {
        MATCH_WEIGHTS
    }
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.niche
            + self.follower
            + self.engagement
            + self.platform
            + self.budget
            + self.experience
            + self.quality
    }

    /// Weighted sum of a breakdown, clamped to [0, 1].
    pub fn apply(&self, b: &MatchBreakdown) -> f64 {
        (self.niche * b.niche_match
            + self.follower * b.follower_match
            + self.engagement * b.engagement_match
            + self.platform * b.platform_match
            + self.budget * b.budget_match
            + self.experience * b.experience_match
            + self.quality * b.quality_match)
            .clamp(0.0, 1.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Niche affinity
// ────────────────────────────────────────────────────────────────────────────

/// Niches considered loosely compatible. Checked in both directions.
const NICHE_AFFINITY: &[(&str, &[&str])] = &[
    ("lifestyle", &["wellness", "fashion", "travel", "food"]),
    ("beauty", &["fashion", "wellness", "lifestyle"]),
    ("fitness", &["wellness", "lifestyle", "health"]),
    ("tech", &["gaming", "productivity", "gadgets"]),
    ("travel", &["lifestyle", "adventure", "culture"]),
    ("food", &["lifestyle", "health", "culture"]),
    ("fashion", &["beauty", "lifestyle", "luxury"]),
    ("wellness", &["fitness", "health", "lifestyle"]),
];

fn lists(niche: &str, other: &str) -> bool {
    NICHE_AFFINITY
        .iter()
        .find(|(key, _)| *key == niche)
        .map(|(_, related)| related.contains(&other))
        .unwrap_or(false)
}

/// Expects lowercased niches.
pub fn niches_related(a: &str, b: &str) -> bool {
    lists(a, b) || lists(b, a)
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

pub fn niche_match(creator: &Creator, campaign: &Campaign) -> f64 {
    let Some(required) = campaign.requirements.as_ref().and_then(|r| r.niche()) else {
        return 0.8;
    };

    let creator_niche = creator.niche.trim().to_lowercase();
    let required = required.to_lowercase();

    if creator_niche == required {
        1.0
    } else if niches_related(&creator_niche, &required) {
        0.7
    } else {
        0.3
    }
}

pub fn follower_match(creator: &Creator, campaign: &Campaign) -> f64 {
    let Some(req) = campaign.requirements.as_ref() else {
        return 1.0;
    };
    let (min, max) = (req.min_followers(), req.max_followers());
    if min.is_none() && max.is_none() {
        return 1.0;
    }

    let followers = creator.total_followers as f64;
    let min = min.unwrap_or(0) as f64;
    let max = max.map(|m| m as f64).unwrap_or(f64::INFINITY);

    if followers >= min && followers <= max {
        return 1.0;
    }

    // min > 0 below the range, max is finite and > 0 above it.
    let distance = if followers < min {
        (min - followers) / min
    } else {
        (followers - max) / max
    };

    (1.0 - distance).clamp(0.0, 1.0)
}

pub fn engagement_match(creator: &Creator, campaign: &Campaign) -> f64 {
    let engagement = creator.avg_engagement_rate;

    let Some(min) = campaign
        .requirements
        .as_ref()
        .and_then(|r| r.min_engagement())
    else {
        return match engagement {
            e if e >= 5.0 => 1.0,
            e if e >= 3.0 => 0.8,
            e if e >= 1.0 => 0.6,
            _ => 0.4,
        };
    };

    if engagement >= min {
        let bonus = ((engagement - min) * 0.1).min(0.3);
        (0.7 + bonus).min(1.0)
    } else {
        (engagement / min).clamp(0.0, 1.0)
    }
}

pub fn platform_match(creator: &Creator, campaign: &Campaign) -> f64 {
    let Some(targets) = campaign.target_platforms() else {
        return 1.0;
    };
    if creator.social_accounts.is_empty() {
        return 0.2;
    }

    let required: HashSet<String> = targets.iter().map(|p| p.to_lowercase()).collect();
    let owned: HashSet<String> = creator.platforms().collect();

    let base = required.intersection(&owned).count() as f64 / required.len() as f64;

    let verified_on_required = creator
        .social_accounts
        .iter()
        .filter(|a| a.verified && required.contains(&a.platform.to_lowercase()))
        .count();

    (base + verified_on_required as f64 * 0.1).clamp(0.0, 1.0)
}

pub fn budget_match(creator: &Creator, campaign: &Campaign) -> f64 {
    let (Some(budget), Some(rates)) = (campaign.budget, creator.rates.as_ref()) else {
        return 0.8;
    };

    let rate = rates.representative();
    if rate <= 0.0 {
        return 0.5;
    }

    let (floor, ceiling) = (budget.floor(), budget.ceiling());

    if rate >= floor && rate <= ceiling {
        1.0
    } else if rate < floor {
        // Cheaper than the floor. floor > rate > 0 here.
        (0.8 + (floor - rate) / floor * 0.2).min(1.0)
    } else if ceiling <= 0.0 {
        0.0
    } else {
        let overage = (rate - ceiling) / ceiling;
        (1.0 - overage).clamp(0.0, 1.0)
    }
}

pub fn experience_match(creator: &Creator, _campaign: &Campaign) -> f64 {
    let experience = match creator.completed_campaigns {
        n if n >= 20 => 1.0,
        n if n >= 10 => 0.8,
        n if n >= 5 => 0.6,
        n if n >= 1 => 0.4,
        _ => 0.2,
    };
    let rating = (creator.rating / 5.0).clamp(0.0, 1.0);

    (experience * 0.6 + rating * 0.4).clamp(0.0, 1.0)
}

pub fn quality_match(creator: &Creator, _campaign: &Campaign) -> f64 {
    let mut quality = 0.5;

    if creator.is_verified {
        quality += 0.2;
    }

    if !creator.portfolio.is_empty() {
        let mean_ratio = creator
            .portfolio
            .iter()
            .map(|item| item.engagement_ratio())
            .sum::<f64>()
            / creator.portfolio.len() as f64;

        if mean_ratio > 0.05 {
            quality += 0.2;
        } else if mean_ratio > 0.03 {
            quality += 0.1;
        }
    }

    let verified_accounts = creator.social_accounts.iter().filter(|a| a.verified).count();
    quality += (verified_accounts as f64 * 0.1).min(0.2);

    quality.clamp(0.0, 1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Combined score
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_breakdown(creator: &Creator, campaign: &Campaign) -> MatchBreakdown {
    MatchBreakdown {
        niche_match: niche_match(creator, campaign),
        follower_match: follower_match(creator, campaign),
        engagement_match: engagement_match(creator, campaign),
        platform_match: platform_match(creator, campaign),
        budget_match: budget_match(creator, campaign),
        experience_match: experience_match(creator, campaign),
        quality_match: quality_match(creator, campaign),
    }
}

/// Scores one creator against one campaign.
pub fn score(creator: &Creator, campaign: &Campaign) -> MatchScore {
    let breakdown = compute_breakdown(creator, campaign);
    let raw = MATCH_WEIGHTS.apply(&breakdown);

    // Confidence reads the unrounded sum; only the published score is rounded.
    MatchScore {
        creator_id: creator.id,
        campaign_id: campaign.id,
        score: round_to_cents(raw),
        confidence: determine_confidence(raw, &breakdown),
        breakdown,
    }
}

/// Three-tier label. Boundary values fall into the higher tier.
pub fn determine_confidence(score: f64, breakdown: &MatchBreakdown) -> Confidence {
    if score >= 0.8 && breakdown.niche_match >= 0.8 && breakdown.follower_match >= 0.7 {
        Confidence::High
    } else if score >= 0.6 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
