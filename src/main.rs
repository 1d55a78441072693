use cupido_algo::config::Settings;
use cupido_algo::core::normalize_profile;
use cupido_algo::models::{Profile, RawMatchRecord};
use cupido_algo::services::{collect_percentages, store, ScoreStatistics};
use cupido_algo::Matcher;
use tracing::{error, info, warn};

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Cupido match generation...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // A broken weight table is fatal before any pair is scored
    if let Err(e) = settings.scoring.weights.validate() {
        error!("Invalid scoring weights: {}", e);
        panic!("Configuration error: {}", e);
    }

    info!("Configuration loaded successfully");

    let raw_records = store::load_records(&settings.io.input_path).unwrap_or_else(|e| {
        error!(
            "Failed to read records from {}: {}",
            settings.io.input_path, e
        );
        panic!("Record store error: {}", e);
    });

    info!(
        "Loaded {} raw records from {}",
        raw_records.len(),
        settings.io.input_path
    );

    // Decode and normalize record by record; an incomplete record is
    // skipped with a diagnostic, never aborting the batch
    let mut profiles: Vec<Profile> = Vec::with_capacity(raw_records.len());
    for value in raw_records {
        let record: RawMatchRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping undecodable record: {}", e);
                continue;
            }
        };

        match normalize_profile(&record) {
            Ok(profile) => profiles.push(profile),
            Err(e) => {
                let id = record.profile_id.as_deref().unwrap_or("<unknown>");
                warn!("Skipping record {}: {}", id, e);
            }
        }
    }

    info!("Normalized {} complete profiles", profiles.len());

    let matcher = Matcher::new(
        settings.scoring.weights.to_weights(),
        settings.matching.max_per_category,
    );

    info!(
        "Matcher initialized (max score: {}, top {} per category)",
        matcher.max_score(),
        settings.matching.max_per_category
    );

    let result = matcher.run_batch(&profiles);

    info!(
        "Evaluated {} candidate pairs for {} profiles",
        result.pairs_evaluated, result.total_profiles
    );

    store::write_matches(&settings.io.output_path, &result.documents).unwrap_or_else(|e| {
        error!(
            "Failed to write matches to {}: {}",
            settings.io.output_path, e
        );
        panic!("Record store error: {}", e);
    });

    info!(
        "Stored {} match documents in {}",
        result.documents.len(),
        settings.io.output_path
    );

    match ScoreStatistics::from_percentages(&collect_percentages(&result.documents)) {
        Some(stats) => stats.log_summary(),
        None => info!("No positive-scoring pairs found"),
    }
}
