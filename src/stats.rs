//! Distributional metrics of an assignment.
//!
//! [`Statistics`] is always derived from an [`Assignment`] and never edited
//! on its own.

use crate::model::Assignment;
use crate::scoring::station_score;

/// Metrics derived from an assignment, in station order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Aggregate score of each station.
    pub station_scores: Vec<f64>,
    /// Sum of all station scores.
    pub total_score: f64,
    /// Mean station score.
    pub mean_score: f64,
    /// Population standard deviation of station scores (divisor = station count).
    pub std_dev: f64,
    /// Officials per station.
    pub counts: Vec<usize>,
    /// Top-tier officials per station.
    pub top_tier_counts: Vec<usize>,
    /// `max(counts) - min(counts)`.
    pub count_spread: usize,
}

impl Statistics {
    /// Number of stations without any top-tier official.
    pub fn stations_missing_top_tier(&self) -> usize {
        self.top_tier_counts.iter().filter(|&&n| n == 0).count()
    }
}

/// Computes the statistics of an assignment.
///
/// The assignment must have at least one station; mean and deviation are
/// undefined otherwise.
pub fn compute_statistics(assignment: &Assignment) -> Statistics {
    debug_assert!(
        assignment.station_count() > 0,
        "statistics need at least one station"
    );

    let station_scores: Vec<f64> = assignment.stations.iter().map(station_score).collect();
    let n = station_scores.len() as f64;
    let total_score: f64 = station_scores.iter().sum();
    let mean_score = total_score / n;
    let variance = station_scores
        .iter()
        .map(|s| (s - mean_score).powi(2))
        .sum::<f64>()
        / n;

    let counts: Vec<usize> = assignment.stations.iter().map(|s| s.len()).collect();
    let top_tier_counts = assignment
        .stations
        .iter()
        .map(|s| s.top_tier_count())
        .collect();
    let max = counts.iter().copied().max().unwrap_or(0);
    let min = counts.iter().copied().min().unwrap_or(0);

    Statistics {
        station_scores,
        total_score,
        mean_score,
        std_dev: variance.sqrt(),
        counts,
        top_tier_counts,
        count_spread: max - min,
    }
}
