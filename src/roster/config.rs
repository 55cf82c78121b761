//! Roster optimization configuration.

use crate::descent::DescentConfig;
use crate::error::RosterResult;
use crate::quality::QualityWeights;

/// Configuration for a roster optimization run.
///
/// The default reproduces the fixed contract: weights 10 / 5 / 1000, at most
/// 1000 sweeps, and an unseeded initial shuffle.
///
/// # Examples
///
/// ```
/// use u_roster::roster::RosterConfig;
/// use u_roster::quality::QualityWeights;
///
/// let config = RosterConfig::default()
///     .with_seed(7)
///     .with_max_sweeps(50)
///     .with_weights(QualityWeights::default().with_balance(20.0));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.weights.balance, 20.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterConfig {
    /// Penalty weights of the quality function.
    pub weights: QualityWeights,
    /// Hard cap on improvement sweeps.
    pub max_sweeps: usize,
    /// Seed for the initial shuffle. `None` draws from OS entropy, so
    /// repeated runs on identical input may differ.
    pub seed: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            weights: QualityWeights::default(),
            max_sweeps: 1000,
            seed: None,
        }
    }
}

impl RosterConfig {
    pub fn with_weights(mut self, weights: QualityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates weights and the sweep cap.
    pub fn validate(&self) -> RosterResult<()> {
        self.weights.validate()?;
        self.descent_config().validate()
    }

    /// The descent parameters this configuration implies.
    pub fn descent_config(&self) -> DescentConfig {
        let config = DescentConfig::default().with_max_sweeps(self.max_sweeps);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
