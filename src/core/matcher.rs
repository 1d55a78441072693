use std::collections::BTreeMap;

use tracing::debug;

use crate::core::scoring::calculate_match_score;
use crate::models::{MatchCandidate, MatchDocument, Profile, RelationshipGoal, ScoringWeights};

/// Default number of candidates kept per relationship-goal category.
pub const DEFAULT_MAX_PER_CATEGORY: usize = 4;

/// Result of a full batch run.
#[derive(Debug)]
pub struct BatchResult {
    pub documents: Vec<MatchDocument>,
    pub total_profiles: usize,
    pub pairs_evaluated: usize,
}

/// Compatibility matcher.
///
/// Scores one subject against a candidate pool, converts raw scores to
/// percentages of the fixed maximum and keeps the top candidates per
/// relationship-goal category.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_score: f64,
    max_per_category: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, max_per_category: usize) -> Self {
        // Fixed for the lifetime of the matcher, never re-derived per pair.
        let max_score = weights.total();
        Self {
            weights,
            max_score,
            max_per_category,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MAX_PER_CATEGORY)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Maximum attainable raw score, the sum of the weights.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Rank the candidate pool for one subject.
    ///
    /// Candidates sharing the subject's id are skipped, ineligible and
    /// zero-scoring pairs are dropped, and each surviving candidate lands
    /// in the category named by its relationship goal. Within a category
    /// candidates are sorted by percentage descending, ties broken by id
    /// ascending, and the list truncated to the configured size.
    pub fn rank_for(&self, subject: &Profile, candidates: &[Profile]) -> MatchDocument {
        let mut by_category: BTreeMap<RelationshipGoal, Vec<MatchCandidate>> = BTreeMap::new();

        for candidate in candidates {
            if candidate.id == subject.id {
                continue;
            }

            let score = calculate_match_score(subject, candidate, &self.weights);
            if score <= 0.0 {
                continue;
            }

            by_category
                .entry(candidate.relationship_goal)
                .or_default()
                .push(MatchCandidate {
                    id: candidate.id.clone(),
                    score: self.to_percentage(score),
                });
        }

        let mut document = MatchDocument::new(subject.id.clone());
        for (goal, mut matches) in by_category {
            matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
            matches.truncate(self.max_per_category);
            debug!(
                "Ranked {} {} candidates for {}",
                matches.len(),
                goal.as_str(),
                subject.id
            );
            document.set_category(goal, matches);
        }

        document
    }

    /// Run the full batch: every profile ranked against the whole pool.
    ///
    /// O(n^2) pairwise evaluations, pure and infallible. The caller owns
    /// all I/O around it.
    pub fn run_batch(&self, profiles: &[Profile]) -> BatchResult {
        let documents = profiles
            .iter()
            .map(|subject| self.rank_for(subject, profiles))
            .collect();

        BatchResult {
            documents,
            total_profiles: profiles.len(),
            pairs_evaluated: profiles.len() * profiles.len().saturating_sub(1),
        }
    }

    /// Convert a raw score to an integer percentage of the maximum.
    #[inline]
    fn to_percentage(&self, score: f64) -> u8 {
        ((score / self.max_score) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
