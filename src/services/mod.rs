// Service exports
pub mod report;
pub mod store;

pub use self::report::{collect_percentages, ScoreStatistics};
pub use self::store::StoreError;
