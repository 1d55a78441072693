use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_MAX_PER_CATEGORY;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub io: IoSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IoSettings {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

fn default_input_path() -> String {
    "data/profiles.json".to_string()
}
fn default_output_path() -> String {
    "data/matches.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_per_category")]
    pub max_per_category: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_per_category: default_max_per_category(),
        }
    }
}

fn default_max_per_category() -> usize {
    DEFAULT_MAX_PER_CATEGORY
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_activities_weight")]
    pub activities: f64,
    #[serde(default = "default_social_weight")]
    pub social: f64,
    #[serde(default = "default_hobby_time_weight")]
    pub hobby_time: f64,
    #[serde(default = "default_values_weight")]
    pub values: f64,
    #[serde(default = "default_personality_weight")]
    pub personality: f64,
    #[serde(default = "default_conflict_style_weight")]
    pub conflict_style: f64,
    #[serde(default = "default_embedding_weight")]
    pub embedding: f64,
}

impl WeightsConfig {
    /// A non-positive or non-finite weight sum would make the percentage
    /// conversion meaningless. Rejected at startup, never per pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.to_weights().total();
        if !total.is_finite() || total <= 0.0 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to a positive finite value, got {}",
                total
            )));
        }
        Ok(())
    }

    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            activities: self.activities,
            social: self.social,
            hobby_time: self.hobby_time,
            values: self.values,
            personality: self.personality,
            conflict_style: self.conflict_style,
            embedding: self.embedding,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            activities: default_activities_weight(),
            social: default_social_weight(),
            hobby_time: default_hobby_time_weight(),
            values: default_values_weight(),
            personality: default_personality_weight(),
            conflict_style: default_conflict_style_weight(),
            embedding: default_embedding_weight(),
        }
    }
}

fn default_activities_weight() -> f64 {
    60.0
}
fn default_social_weight() -> f64 {
    30.0
}
fn default_hobby_time_weight() -> f64 {
    5.0
}
fn default_values_weight() -> f64 {
    180.0
}
fn default_personality_weight() -> f64 {
    90.0
}
fn default_conflict_style_weight() -> f64 {
    30.0
}
fn default_embedding_weight() -> f64 {
    100.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CUPIDO__)
    ///    e.g., CUPIDO__MATCHING__MAX_PER_CATEGORY -> matching.max_per_category
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("CUPIDO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CUPIDO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
