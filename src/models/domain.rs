use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound of the rating scale used by every importance and trait field.
pub const RATING_SCALE_MAX: u8 = 6;

/// Gender identity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Undisclosed,
}

impl Gender {
    /// Every gender category, the expansion of the "any" preference.
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::Undisclosed,
    ];

    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "non-binary" => Some(Gender::NonBinary),
            "undisclosed" => Some(Gender::Undisclosed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
            Gender::Undisclosed => "undisclosed",
        }
    }
}

/// What a user is looking for. Two profiles must agree exactly to be
/// eligible, and ranked results are bucketed by this category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipGoal {
    Romantic,
    Casual,
    Friendship,
}

impl RelationshipGoal {
    pub fn parse(s: &str) -> Option<RelationshipGoal> {
        match s {
            "romantic" => Some(RelationshipGoal::Romantic),
            "casual" => Some(RelationshipGoal::Casual),
            "friendship" => Some(RelationshipGoal::Friendship),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipGoal::Romantic => "romantic",
            RelationshipGoal::Casual => "casual",
            RelationshipGoal::Friendship => "friendship",
        }
    }
}

/// Conflict resolution styles. Matching styles earn a flat scoring bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStyle {
    Understanding,
    Compromising,
    Assertive,
    Avoiding,
}

impl ConflictStyle {
    pub fn parse(s: &str) -> Option<ConflictStyle> {
        match s {
            "understanding" => Some(ConflictStyle::Understanding),
            "compromising" => Some(ConflictStyle::Compromising),
            "assertive" => Some(ConflictStyle::Assertive),
            "avoiding" => Some(ConflictStyle::Avoiding),
            _ => None,
        }
    }
}

/// The set of partner genders a profile accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreferences {
    /// The "any" sentinel, open to the full gender set.
    Any,
    /// An explicit list of accepted genders. Invariant: non-empty.
    Of(Vec<Gender>),
}

impl GenderPreferences {
    /// Concrete gender categories this preference set resolves to.
    pub fn resolved(&self) -> &[Gender] {
        match self {
            GenderPreferences::Any => &Gender::ALL,
            GenderPreferences::Of(genders) => genders,
        }
    }

    pub fn accepts(&self, gender: Gender) -> bool {
        self.resolved().contains(&gender)
    }
}

/// Importance ratings (0-6) for the eleven named relationship values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesImportance {
    pub honesty: u8,
    pub loyalty: u8,
    pub kindness: u8,
    pub respect: u8,
    pub open_mindedness: u8,
    pub independence: u8,
    pub ambition: u8,
    pub creativity: u8,
    pub humor: u8,
    pub authenticity: u8,
    pub empathy: u8,
}

impl ValuesImportance {
    pub const COUNT: usize = 11;

    pub fn as_array(&self) -> [u8; Self::COUNT] {
        [
            self.honesty,
            self.loyalty,
            self.kindness,
            self.respect,
            self.open_mindedness,
            self.independence,
            self.ambition,
            self.creativity,
            self.humor,
            self.authenticity,
            self.empathy,
        ]
    }
}

/// Self-ratings (0-6) for the four personality traits used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub closeness_ease: u8,
    pub attention_to_detail: u8,
    pub stress_level: u8,
    pub imagination: u8,
}

impl PersonalityTraits {
    pub const COUNT: usize = 4;

    pub fn as_array(&self) -> [u8; Self::COUNT] {
        [
            self.closeness_ease,
            self.attention_to_detail,
            self.stress_level,
            self.imagination,
        ]
    }
}

/// Normalized matching profile for one user.
///
/// Built from a raw joined record by `core::normalize` and treated as
/// immutable for the duration of a batch run. Rating fields are guaranteed
/// to lie on the 0-6 scale, which keeps the gate and scorer total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub age: u8,
    pub gender: Gender,
    pub gender_preferences: GenderPreferences,
    pub relationship_goal: RelationshipGoal,
    pub accepts_older: bool,
    pub accepts_younger: bool,
    /// Activity tags. May be empty, which zeroes the activities sub-score.
    pub activities: HashSet<String>,
    pub social_preference: u8,
    /// Weekly hobby hours, the numeric midpoint of a categorical bucket.
    pub hobby_time_hours: f64,
    pub values_importance: ValuesImportance,
    pub personality_traits: PersonalityTraits,
    pub conflict_style: ConflictStyle,
    /// Embedding of the user's free-text self description, if one exists.
    pub self_description_embedding: Option<Vec<f32>>,
    /// Embedding of the user's free-text "what I'm attracted to" answer.
    pub attracted_to_embedding: Option<Vec<f32>>,
}

/// Scoring weights for the seven compatibility terms.
///
/// Each sub-score tops out at its weight, so `total()` is the maximum
/// attainable raw score and the fixed denominator for percentages.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub activities: f64,
    pub social: f64,
    pub hobby_time: f64,
    pub values: f64,
    pub personality: f64,
    pub conflict_style: f64,
    pub embedding: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.activities
            + self.social
            + self.hobby_time
            + self.values
            + self.personality
            + self.conflict_style
            + self.embedding
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            activities: 60.0,
            social: 30.0,
            hobby_time: 5.0,
            values: 180.0,
            personality: 90.0,
            conflict_style: 30.0,
            embedding: 100.0,
        }
    }
}
