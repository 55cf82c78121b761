//! Descent configuration.

use crate::error::{RosterError, RosterResult};

/// Configuration parameters for best-improvement descent.
///
/// # Examples
///
/// ```
/// use u_roster::descent::DescentConfig;
///
/// let config = DescentConfig::default()
///     .with_max_sweeps(200)
///     .with_seed(42);
/// assert_eq!(config.max_sweeps, 200);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescentConfig {
    /// Hard cap on improvement sweeps, reached or not.
    pub max_sweeps: usize,
    /// Random seed for the initial solution (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            max_sweeps: 1000,
            seed: None,
        }
    }
}

impl DescentConfig {
    /// Sets the maximum number of sweeps.
    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RosterResult<()> {
        if self.max_sweeps == 0 {
            return Err(RosterError::InvalidConfig(
                "max_sweeps must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
