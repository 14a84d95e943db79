//! Eligibility gating and top-N ranking over candidate pools.
//!
//! Hard requirements gate candidates before scoring; the same fields feed the
//! soft sub-scores used to order the survivors.

use std::cmp::Ordering;

use tracing::debug;

use crate::matching::models::{Campaign, Creator, MatchScore};
use crate::matching::scoring::score;

pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// True when the creator satisfies every hard requirement the campaign sets.
pub fn is_eligible(creator: &Creator, campaign: &Campaign) -> bool {
    let Some(req) = campaign.requirements.as_ref() else {
        return true;
    };

    if req
        .min_followers()
        .is_some_and(|min| creator.total_followers < min)
    {
        return false;
    }
    if req
        .max_followers()
        .is_some_and(|max| creator.total_followers > max)
    {
        return false;
    }
    if req
        .min_engagement()
        .is_some_and(|min| creator.avg_engagement_rate < min)
    {
        return false;
    }

    if let Some(platforms) = req.platforms() {
        let required: Vec<String> = platforms.iter().map(|p| p.to_lowercase()).collect();
        if !creator.platforms().any(|p| required.contains(&p)) {
            return false;
        }
    }

    true
}

/// Best creators for a campaign, highest score first.
pub fn rank_creators_for_campaign(
    campaign: &Campaign,
    creators: &[Creator],
    limit: usize,
) -> Vec<MatchScore> {
    let mut ranked: Vec<(MatchScore, f64)> = creators
        .iter()
        .filter(|creator| is_eligible(creator, campaign))
        .map(|creator| (score(creator, campaign), creator.rating))
        .collect();

    debug!(
        campaign_id = campaign.id,
        pool = creators.len(),
        eligible = ranked.len(),
        "Ranking creators for campaign"
    );

    ranked.sort_by(|(a, a_rating), (b, b_rating)| {
        by_score_desc(a, b)
            .then_with(|| b_rating.total_cmp(a_rating))
            .then_with(|| a.creator_id.cmp(&b.creator_id))
    });

    ranked.into_iter().take(limit).map(|(m, _)| m).collect()
}

/// Best active campaigns for a creator, highest score first.
pub fn rank_campaigns_for_creator(
    creator: &Creator,
    campaigns: &[Campaign],
    limit: usize,
) -> Vec<MatchScore> {
    let mut ranked: Vec<MatchScore> = campaigns
        .iter()
        .filter(|campaign| campaign.is_active())
        .filter(|campaign| is_eligible(creator, campaign))
        .map(|campaign| score(creator, campaign))
        .collect();

    debug!(
        creator_id = creator.id,
        pool = campaigns.len(),
        eligible = ranked.len(),
        "Ranking campaigns for creator"
    );

    // Creator rating is constant across this pool, so ties fall to campaign id.
    ranked.sort_by(|a, b| by_score_desc(a, b).then_with(|| a.campaign_id.cmp(&b.campaign_id)));
    ranked.truncate(limit);
    ranked
}

fn by_score_desc(a: &MatchScore, b: &MatchScore) -> Ordering {
    b.score.total_cmp(&a.score)
}
