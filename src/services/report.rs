use tracing::info;

use crate::models::MatchDocument;

/// Summary statistics over the match percentages a batch run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreStatistics {
    pub count: usize,
    pub average: f64,
    pub median: u8,
    pub lowest: u8,
    pub highest: u8,
    pub interquartile_range: u8,
}

impl ScoreStatistics {
    /// Compute statistics over all emitted percentages.
    /// Returns None when the batch produced no positive-scoring pair.
    pub fn from_percentages(percentages: &[u8]) -> Option<Self> {
        if percentages.is_empty() {
            return None;
        }

        let mut sorted = percentages.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let sum: u64 = sorted.iter().map(|&p| p as u64).sum();
        let q1 = sorted[count / 4];
        let q3 = sorted[(count * 3) / 4];

        Some(Self {
            count,
            average: sum as f64 / count as f64,
            median: sorted[count / 2],
            lowest: sorted[0],
            highest: sorted[count - 1],
            interquartile_range: q3 - q1,
        })
    }

    pub fn log_summary(&self) {
        info!("Match percentage statistics over {} candidates", self.count);
        info!("  average: {:.1}", self.average);
        info!("  median: {}", self.median);
        info!("  lowest: {}, highest: {}", self.lowest, self.highest);
        info!("  interquartile range: {}", self.interquartile_range);
    }
}

/// Flatten every percentage from a batch's documents, across all categories.
pub fn collect_percentages(documents: &[MatchDocument]) -> Vec<u8> {
    let mut percentages = Vec::new();
    for document in documents {
        for category in [&document.romantic, &document.casual, &document.friendship] {
            if let Some(matches) = category {
                percentages.extend(matches.iter().map(|m| m.score));
            }
        }
    }
    percentages
}
