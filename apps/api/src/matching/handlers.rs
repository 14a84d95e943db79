//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::matching::explain::explain;
use crate::matching::models::{
    Campaign, CampaignId, CampaignStatus, Creator, CreatorId, MatchScore,
};
use crate::matching::ranking::{rank_campaigns_for_creator, rank_creators_for_campaign};
use crate::matching::scoring::score;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankedMatch {
    pub match_score: MatchScore,
    pub explanation: Vec<String>,
}

impl From<MatchScore> for RankedMatch {
    fn from(match_score: MatchScore) -> Self {
        let explanation = explain(&match_score);
        Self {
            match_score,
            explanation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CampaignMatchesResponse {
    pub campaign_id: CampaignId,
    pub total_candidates: usize,
    pub matches: Vec<RankedMatch>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreatorMatchesResponse {
    pub creator_id: CreatorId,
    pub total_candidates: usize,
    pub matches: Vec<RankedMatch>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub creator: Creator,
    pub campaign: Campaign,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/campaigns/:id/matches
///
/// Ranks every creator in the store against the campaign.
pub async fn handle_campaign_matches(
    State(state): State<AppState>,
    Path(campaign_id): Path<CampaignId>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<CampaignMatchesResponse>, AppError> {
    let limit = resolve_limit(query.limit, &state.config)?;

    let campaign = state
        .store
        .get_campaign(campaign_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign {campaign_id} not found")))?;

    let creators = state.store.list_creators().await?;
    let matches = rank_creators_for_campaign(&campaign, &creators, limit);

    info!(
        "Matched campaign {campaign_id}: {} of {} creators returned",
        matches.len(),
        creators.len()
    );

    Ok(Json(CampaignMatchesResponse {
        campaign_id,
        total_candidates: creators.len(),
        matches: matches.into_iter().map(RankedMatch::from).collect(),
        generated_at: Utc::now(),
    }))
}

/// GET /api/v1/creators/:id/matches
///
/// Ranks active campaigns for the creator.
pub async fn handle_creator_matches(
    State(state): State<AppState>,
    Path(creator_id): Path<CreatorId>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<CreatorMatchesResponse>, AppError> {
    let limit = resolve_limit(query.limit, &state.config)?;

    let creator = state
        .store
        .get_creator(creator_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Creator {creator_id} not found")))?;

    let campaigns = state
        .store
        .list_campaigns_by_status(CampaignStatus::Active)
        .await?;
    let matches = rank_campaigns_for_creator(&creator, &campaigns, limit);

    info!(
        "Matched creator {creator_id}: {} of {} active campaigns returned",
        matches.len(),
        campaigns.len()
    );

    Ok(Json(CreatorMatchesResponse {
        creator_id,
        total_candidates: campaigns.len(),
        matches: matches.into_iter().map(RankedMatch::from).collect(),
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/matches/score
///
/// Scores an ad-hoc creator/campaign pair. No eligibility gate is applied.
pub async fn handle_score(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<RankedMatch>, AppError> {
    validate_creator(&request.creator)?;
    validate_campaign(&request.campaign)?;

    Ok(Json(RankedMatch::from(score(
        &request.creator,
        &request.campaign,
    ))))
}

// ────────────────────────────────────────────────────────────────────────────
// Input checks
// ────────────────────────────────────────────────────────────────────────────

fn resolve_limit(requested: Option<usize>, config: &Config) -> Result<usize, AppError> {
    match requested {
        None => Ok(config.default_match_limit),
        Some(limit) if (1..=config.max_match_limit).contains(&limit) => Ok(limit),
        Some(limit) => Err(AppError::Validation(format!(
            "limit must be between 1 and {}, got {limit}",
            config.max_match_limit
        ))),
    }
}

fn validate_creator(creator: &Creator) -> Result<(), AppError> {
    if creator.niche.trim().is_empty() {
        return Err(AppError::Validation("creator.niche cannot be empty".to_string()));
    }
    if !creator.avg_engagement_rate.is_finite() || creator.avg_engagement_rate < 0.0 {
        return Err(AppError::Validation(
            "creator.avg_engagement_rate must be a non-negative number".to_string(),
        ));
    }
    if !(0.0..=5.0).contains(&creator.rating) {
        return Err(AppError::Validation(
            "creator.rating must be between 0 and 5".to_string(),
        ));
    }
    if let Some(rates) = &creator.rates {
        let negative = [rates.post, rates.story, rates.reel]
            .into_iter()
            .flatten()
            .any(|rate| !rate.is_finite() || rate < 0.0);
        if negative {
            return Err(AppError::Validation(
                "creator.rates must be non-negative numbers".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_campaign(campaign: &Campaign) -> Result<(), AppError> {
    if let Some(budget) = &campaign.budget {
        let malformed = [budget.min, budget.max]
            .into_iter()
            .flatten()
            .any(|bound| !bound.is_finite() || bound < 0.0);
        if malformed {
            return Err(AppError::Validation(
                "campaign.budget bounds must be non-negative numbers".to_string(),
            ));
        }
        if budget.floor() > budget.ceiling() {
            return Err(AppError::Validation(
                "campaign.budget.min cannot exceed campaign.budget.max".to_string(),
            ));
        }
    }
    if let Some(min) = campaign.requirements.as_ref().and_then(|r| r.min_engagement) {
        if !min.is_finite() || min < 0.0 {
            return Err(AppError::Validation(
                "campaign.requirements.min_engagement must be a non-negative number".to_string(),
            ));
        }
    }
    Ok(())
}
