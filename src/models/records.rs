use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw attribute bag for one user, already joined from the profile,
/// preference and embedding sources by the upstream collaborator.
///
/// Every field is optional at this layer on purpose: required-field checks
/// happen in `core::normalize`, where an incomplete record surfaces as a
/// diagnostic naming the missing key instead of failing the whole batch at
/// deserialization time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMatchRecord {
    #[serde(rename = "profileId")]
    pub profile_id: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    #[serde(rename = "genderPreferences", default)]
    pub gender_preferences: Option<Vec<String>>,
    #[serde(rename = "relationshipGoal")]
    pub relationship_goal: Option<String>,
    #[serde(rename = "acceptsOlder")]
    pub accepts_older: Option<bool>,
    #[serde(rename = "acceptsYounger")]
    pub accepts_younger: Option<bool>,
    #[serde(default)]
    pub activities: Option<Vec<String>>,
    #[serde(rename = "socialPreference")]
    pub social_preference: Option<u8>,
    #[serde(rename = "hobbyTime")]
    pub hobby_time: Option<String>,
    #[serde(rename = "honestyImportance")]
    pub honesty_importance: Option<u8>,
    #[serde(rename = "loyaltyImportance")]
    pub loyalty_importance: Option<u8>,
    #[serde(rename = "kindnessImportance")]
    pub kindness_importance: Option<u8>,
    #[serde(rename = "respectImportance")]
    pub respect_importance: Option<u8>,
    #[serde(rename = "openMindednessImportance")]
    pub open_mindedness_importance: Option<u8>,
    #[serde(rename = "independenceImportance")]
    pub independence_importance: Option<u8>,
    #[serde(rename = "ambitionImportance")]
    pub ambition_importance: Option<u8>,
    #[serde(rename = "creativityImportance")]
    pub creativity_importance: Option<u8>,
    #[serde(rename = "humorImportance")]
    pub humor_importance: Option<u8>,
    #[serde(rename = "authenticityImportance")]
    pub authenticity_importance: Option<u8>,
    #[serde(rename = "empathyImportance")]
    pub empathy_importance: Option<u8>,
    #[serde(rename = "closenessEase")]
    pub closeness_ease: Option<u8>,
    #[serde(rename = "conflictResolution")]
    pub conflict_resolution: Option<String>,
    #[serde(rename = "attentionToDetail")]
    pub attention_to_detail: Option<u8>,
    #[serde(rename = "stressLevel")]
    pub stress_level: Option<u8>,
    pub imagination: Option<u8>,
    #[serde(rename = "textEmbeddings", default)]
    pub text_embeddings: Option<TextEmbeddings>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Externally generated embedding vectors for a user's free-text answers.
/// Either vector may be null when the user left the answer blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextEmbeddings {
    #[serde(rename = "selfDescription", default)]
    pub self_description: Option<Vec<f32>>,
    #[serde(rename = "attractedTo", default)]
    pub attracted_to: Option<Vec<f32>>,
}
