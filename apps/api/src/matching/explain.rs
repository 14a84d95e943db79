//! Human-readable commentary for a match result.

use crate::matching::models::MatchScore;

/// Verdict line first, then one line per notable dimension. Dimensions in the
/// unremarkable middle band produce nothing.
pub fn explain(match_score: &MatchScore) -> Vec<String> {
    let b = &match_score.breakdown;
    let mut lines = Vec::new();

    let verdict = match match_score.score {
        s if s >= 0.8 => "Excellent match - highly recommended",
        s if s >= 0.6 => "Good match - worth considering",
        _ => "Moderate match - review carefully",
    };
    lines.push(verdict);

    if b.niche_match >= 0.8 {
        lines.push("Perfect niche alignment");
    } else if b.niche_match >= 0.6 {
        lines.push("Good niche compatibility");
    } else if b.niche_match < 0.5 {
        lines.push("Limited niche alignment");
    }

    if b.follower_match >= 0.9 {
        lines.push("Follower count perfectly matches requirements");
    } else if b.follower_match >= 0.7 {
        lines.push("Good follower count match");
    }

    if b.engagement_match >= 0.8 {
        lines.push("Excellent engagement rate");
    } else if b.engagement_match < 0.5 {
        lines.push("Engagement rate below expectations");
    }

    if b.platform_match >= 0.9 {
        lines.push("All required platforms available");
    } else if b.platform_match < 0.7 {
        lines.push("Some required platforms missing");
    }

    if b.experience_match >= 0.8 {
        lines.push("Highly experienced creator");
    } else if b.experience_match < 0.4 {
        lines.push("New creator with limited campaign history");
    }

    lines.into_iter().map(str::to_string).collect()
}
