// Model exports
pub mod domain;
pub mod records;
pub mod results;

pub use self::domain::{
    ConflictStyle, Gender, GenderPreferences, PersonalityTraits, Profile, RelationshipGoal,
    ScoringWeights, ValuesImportance, RATING_SCALE_MAX,
};
pub use self::records::{RawMatchRecord, TextEmbeddings};
pub use self::results::{MatchCandidate, MatchDocument};
