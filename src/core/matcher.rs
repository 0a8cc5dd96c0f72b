use crate::core::scoring::calculate_match_score;
use crate::models::{MatchScore, MenteeProfile, MentorProfile, ScoringWeights};

/// Maximum number of matches returned for one mentee
pub const MAX_RESULTS: usize = 5;

/// Result of one matching pass
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchScore>,
    pub total_candidates: usize,
}

/// Matching orchestrator
///
/// Scores every mentor in the pool against one mentee, drops zero scores,
/// ranks descending, and keeps the top results. Holds only immutable
/// weights, so one instance is safely shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Find matches for a mentee across a candidate pool
    ///
    /// An empty pool yields an empty result. Only candidates with a strictly
    /// positive score are retained, and ties keep their computation order
    /// (the sort is stable).
    pub fn find_matches(
        &self,
        mentee: &MenteeProfile,
        mentors: Vec<MentorProfile>,
    ) -> MatchOutcome {
        let total_candidates = mentors.len();

        let mut matches: Vec<MatchScore> = mentors
            .iter()
            .map(|mentor| calculate_match_score(mentee, mentor, &self.weights))
            .filter(|m| m.score > 0)
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(MAX_RESULTS);

        MatchOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
