use thiserror::Error;

use crate::models::{
    ConflictStyle, Gender, GenderPreferences, PersonalityTraits, Profile, RawMatchRecord,
    RelationshipGoal, ValuesImportance, RATING_SCALE_MAX,
};

/// Sentinel entry in the raw preference list that expands to every gender.
const ANY_PREFERENCE: &str = "any";

/// Midpoint used for unknown hobby-time buckets, same as the "5-10h" bucket.
const DEFAULT_HOBBY_HOURS: f64 = 7.5;

/// Errors produced while normalizing one raw record into a `Profile`.
///
/// The caller skips the offending record with a diagnostic; a bad record
/// never aborts the batch.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("rating out of range for {field}: {value} (scale is 0-6)")]
    OutOfRange { field: &'static str, value: u8 },
}

/// Map a categorical hobby-time bucket to its numeric midpoint in hours.
/// The mapping is total: unknown buckets fall back to the default midpoint.
pub fn parse_hobby_time(bucket: &str) -> f64 {
    match bucket {
        "<5h" => 2.5,
        "5-10h" => 7.5,
        "10-20h" => 15.0,
        ">20h" => 25.0,
        _ => DEFAULT_HOBBY_HOURS,
    }
}

/// Build a canonical `Profile` from a raw joined record.
///
/// Required fields must be present, categorical strings must parse into
/// their closed enums and ratings must sit on the 0-6 scale. The range
/// checks happen here so that the gate and scorer downstream stay total.
pub fn normalize_profile(record: &RawMatchRecord) -> Result<Profile, NormalizeError> {
    // Fields are checked in record layout order so the first diagnostic
    // points at the earliest hole in the record.
    let id = require("profileId", record.profile_id.clone())?;
    let age = require("age", record.age)?;
    let gender = categorical("gender", record.gender.as_deref(), Gender::parse)?;
    let gender_preferences =
        parse_preferences(record.gender_preferences.as_deref().unwrap_or_default())?;
    let relationship_goal = categorical(
        "relationshipGoal",
        record.relationship_goal.as_deref(),
        RelationshipGoal::parse,
    )?;
    let accepts_older = require("acceptsOlder", record.accepts_older)?;
    let accepts_younger = require("acceptsYounger", record.accepts_younger)?;
    let activities = require("activities", record.activities.clone())?;
    let social_preference = rating("socialPreference", record.social_preference)?;
    let hobby_time = require("hobbyTime", record.hobby_time.clone())?;

    let values_importance = ValuesImportance {
        honesty: rating("honestyImportance", record.honesty_importance)?,
        loyalty: rating("loyaltyImportance", record.loyalty_importance)?,
        kindness: rating("kindnessImportance", record.kindness_importance)?,
        respect: rating("respectImportance", record.respect_importance)?,
        open_mindedness: rating("openMindednessImportance", record.open_mindedness_importance)?,
        independence: rating("independenceImportance", record.independence_importance)?,
        ambition: rating("ambitionImportance", record.ambition_importance)?,
        creativity: rating("creativityImportance", record.creativity_importance)?,
        humor: rating("humorImportance", record.humor_importance)?,
        authenticity: rating("authenticityImportance", record.authenticity_importance)?,
        empathy: rating("empathyImportance", record.empathy_importance)?,
    };

    let personality_traits = PersonalityTraits {
        closeness_ease: rating("closenessEase", record.closeness_ease)?,
        attention_to_detail: rating("attentionToDetail", record.attention_to_detail)?,
        stress_level: rating("stressLevel", record.stress_level)?,
        imagination: rating("imagination", record.imagination)?,
    };

    let conflict_style = categorical(
        "conflictResolution",
        record.conflict_resolution.as_deref(),
        ConflictStyle::parse,
    )?;

    let embeddings = record.text_embeddings.clone().unwrap_or_default();

    Ok(Profile {
        id,
        age,
        gender,
        gender_preferences,
        relationship_goal,
        accepts_older,
        accepts_younger,
        activities: activities.into_iter().collect(),
        social_preference,
        hobby_time_hours: parse_hobby_time(&hobby_time),
        values_importance,
        personality_traits,
        conflict_style,
        self_description_embedding: embeddings.self_description,
        attracted_to_embedding: embeddings.attracted_to,
    })
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, NormalizeError> {
    value.ok_or(NormalizeError::MissingField(field))
}

fn rating(field: &'static str, value: Option<u8>) -> Result<u8, NormalizeError> {
    let value = require(field, value)?;
    if value > RATING_SCALE_MAX {
        return Err(NormalizeError::OutOfRange { field, value });
    }
    Ok(value)
}

fn categorical<T>(
    field: &'static str,
    value: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Result<T, NormalizeError> {
    let raw = require(field, value)?;
    parse(raw).ok_or_else(|| NormalizeError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

/// A missing or empty preference list violates the profile invariant, so
/// both cases report the field as missing.
fn parse_preferences(raw: &[String]) -> Result<GenderPreferences, NormalizeError> {
    if raw.is_empty() {
        return Err(NormalizeError::MissingField("genderPreferences"));
    }
    if raw.iter().any(|entry| entry == ANY_PREFERENCE) {
        return Ok(GenderPreferences::Any);
    }

    let mut genders = Vec::with_capacity(raw.len());
    for entry in raw {
        let gender = Gender::parse(entry).ok_or_else(|| NormalizeError::InvalidValue {
            field: "genderPreferences",
            value: entry.clone(),
        })?;
        if !genders.contains(&gender) {
            genders.push(gender);
        }
    }
    Ok(GenderPreferences::Of(genders))
}
