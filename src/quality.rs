//! Scalar quality of an assignment (lower is better).
//!
//! The quality is a weighted sum of three penalties:
//!
//! - **balance**: standard deviation of station scores
//! - **headcount**: spread of per-station official counts
//! - **eligibility**: stations without a top-tier official
//!
//! The eligibility weight is large enough to dominate the other two terms,
//! so any move that removes a violation wins over any balance gain while
//! intermediate states may still be infeasible.

use crate::error::{RosterError, RosterResult};
use crate::stats::Statistics;

/// Weights of the three penalty terms.
///
/// # Examples
///
/// ```
/// use u_roster::quality::QualityWeights;
///
/// let w = QualityWeights::default();
/// assert_eq!((w.balance, w.headcount, w.eligibility), (10.0, 5.0, 1000.0));
///
/// let softer = QualityWeights::default().with_eligibility(500.0);
/// assert!(softer.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityWeights {
    /// Multiplier on the standard deviation of station scores.
    pub balance: f64,
    /// Multiplier on the max-min spread of station headcounts.
    pub headcount: f64,
    /// Penalty per station lacking a top-tier official.
    pub eligibility: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            balance: 10.0,
            headcount: 5.0,
            eligibility: 1000.0,
        }
    }
}

impl QualityWeights {
    pub fn with_balance(mut self, w: f64) -> Self {
        self.balance = w;
        self
    }

    pub fn with_headcount(mut self, w: f64) -> Self {
        self.headcount = w;
        self
    }

    pub fn with_eligibility(mut self, w: f64) -> Self {
        self.eligibility = w;
        self
    }

    /// Validates that every weight is finite and non-negative.
    pub fn validate(&self) -> RosterResult<()> {
        for (name, w) in [
            ("balance", self.balance),
            ("headcount", self.headcount),
            ("eligibility", self.eligibility),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(RosterError::InvalidConfig(format!(
                    "{name} weight must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// The individual penalty terms behind a quality score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityBreakdown {
    pub balance: f64,
    pub headcount: f64,
    pub eligibility: f64,
    pub stations_missing_top_tier: usize,
}

impl QualityBreakdown {
    pub fn from_statistics(stats: &Statistics, weights: &QualityWeights) -> Self {
        let missing = stats.stations_missing_top_tier();
        Self {
            balance: stats.std_dev * weights.balance,
            headcount: stats.count_spread as f64 * weights.headcount,
            eligibility: missing as f64 * weights.eligibility,
            stations_missing_top_tier: missing,
        }
    }

    /// Sum of the three terms.
    pub fn total(&self) -> f64 {
        self.balance + self.headcount + self.eligibility
    }
}

/// Quality score of the given statistics. Lower is better.
pub fn quality(stats: &Statistics, weights: &QualityWeights) -> f64 {
    QualityBreakdown::from_statistics(stats, weights).total()
}
