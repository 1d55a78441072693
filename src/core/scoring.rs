use crate::core::gate::is_eligible;
use crate::core::similarity::cosine_similarity;
use crate::models::{PersonalityTraits, Profile, ScoringWeights, ValuesImportance, RATING_SCALE_MAX};

/// Span in hours over which the hobby-time difference decays to zero.
const HOBBY_TIME_SPAN_HOURS: f64 = 20.0;

/// Minimum importance rating for a value to count as shared.
const SHARED_VALUE_THRESHOLD: u8 = 4;

/// Calculate the raw compatibility score for a pair of profiles.
///
/// Returns 0 for pairs rejected by the gate, without evaluating any
/// sub-score. For eligible pairs the score is the weighted sum of seven
/// terms; each term tops out at its weight, so the result lies in
/// [0, weights.total()] barring a negative embedding similarity.
///
/// The activities and embedding terms are directional: `a` is the subject
/// whose activity count and "attracted to" vector anchor the comparison,
/// so score(a, b) and score(b, a) can legitimately differ.
pub fn calculate_match_score(a: &Profile, b: &Profile, weights: &ScoringWeights) -> f64 {
    if !is_eligible(a, b) {
        return 0.0;
    }

    let mut score = activities_score(a, b) * weights.activities;
    score += social_score(a, b) * weights.social;
    score += hobby_time_score(a, b) * weights.hobby_time;
    score += values_score(a, b) * weights.values;
    score += personality_score(a, b) * weights.personality;
    if a.conflict_style == b.conflict_style {
        score += weights.conflict_style;
    }
    score += embedding_score(a, b) * weights.embedding;

    score
}

/// Shared activity count relative to the subject's own activity count.
/// A subject with no activities scores zero here.
#[inline]
fn activities_score(a: &Profile, b: &Profile) -> f64 {
    let common = a.activities.intersection(&b.activities).count();
    common as f64 / a.activities.len().max(1) as f64
}

/// Linear decay of the social-preference gap over the rating scale.
#[inline]
fn social_score(a: &Profile, b: &Profile) -> f64 {
    let diff = (a.social_preference as f64 - b.social_preference as f64).abs();
    1.0 - diff / RATING_SCALE_MAX as f64
}

/// Linear decay of the weekly hobby-hours gap, capped at the full span.
#[inline]
fn hobby_time_score(a: &Profile, b: &Profile) -> f64 {
    let diff = (a.hobby_time_hours - b.hobby_time_hours).abs();
    1.0 - (diff / HOBBY_TIME_SPAN_HOURS).min(1.0)
}

/// Fraction of the eleven values both profiles rate at the shared-value
/// threshold or above. No partial credit below the threshold.
#[inline]
fn values_score(a: &Profile, b: &Profile) -> f64 {
    let a_values = a.values_importance.as_array();
    let b_values = b.values_importance.as_array();
    let shared = a_values
        .iter()
        .zip(b_values.iter())
        .filter(|(x, y)| **x >= SHARED_VALUE_THRESHOLD && **y >= SHARED_VALUE_THRESHOLD)
        .count();
    shared as f64 / ValuesImportance::COUNT as f64
}

/// Mean per-trait linear decay over the rating scale.
#[inline]
fn personality_score(a: &Profile, b: &Profile) -> f64 {
    let a_traits = a.personality_traits.as_array();
    let b_traits = b.personality_traits.as_array();
    let total: f64 = a_traits
        .iter()
        .zip(b_traits.iter())
        .map(|(x, y)| 1.0 - (*x as f64 - *y as f64).abs() / RATING_SCALE_MAX as f64)
        .sum();
    total / PersonalityTraits::COUNT as f64
}

/// Directional semantic fit: the subject's "attracted to" vector against
/// the candidate's self description. Missing vectors contribute nothing.
#[inline]
fn embedding_score(a: &Profile, b: &Profile) -> f64 {
    match (&a.attracted_to_embedding, &b.self_description_embedding) {
        (Some(attracted), Some(description)) => cosine_similarity(attracted, description),
        _ => 0.0,
    }
}
