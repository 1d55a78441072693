//! Cupido Algo - compatibility scoring and match generation engine
//!
//! This library provides the core matching algorithm used by the Cupido
//! platform: a hard compatibility gate, a seven-term weighted scorer and a
//! per-category top-K ranker, run as a pure O(n^2) batch over a profile
//! pool. Reading raw records and persisting the resulting match documents
//! are thin file-backed collaborators around that core.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, normalize_profile, BatchResult, Matcher, NormalizeError};
pub use crate::models::{
    MatchCandidate, MatchDocument, Profile, RawMatchRecord, ScoringWeights,
};
