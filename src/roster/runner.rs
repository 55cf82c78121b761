//! Roster optimization entry points.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use super::config::RosterConfig;
use super::problem::RosterProblem;
use crate::descent::{DescentProblem, DescentRunner};
use crate::error::{RosterError, RosterResult};
use crate::model::{Assignment, Official};
use crate::quality::{QualityBreakdown, QualityWeights};
use crate::stats::Statistics;

/// Final outcome of an optimization run. Never mutated after construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Best assignment reached.
    pub assignment: Assignment,
    /// Statistics of `assignment`.
    pub statistics: Statistics,
    /// Quality of `assignment` (lower is better).
    pub quality: f64,
    /// Quality of the randomized initial assignment.
    pub initial_quality: f64,
    /// Improvement sweeps executed.
    pub sweeps: usize,
    /// Quality after each accepted sweep, starting with `initial_quality`.
    pub quality_history: Vec<f64>,
}

impl Allocation {
    /// `true` when every station holds at least one top-tier official.
    pub fn is_eligible(&self) -> bool {
        self.statistics.stations_missing_top_tier() == 0
    }

    /// Penalty terms behind `quality`, given the weights of the run.
    pub fn breakdown(&self, weights: &QualityWeights) -> QualityBreakdown {
        QualityBreakdown::from_statistics(&self.statistics, weights)
    }
}

/// Checks the call preconditions and re-validates every official.
///
/// # Errors
///
/// - [`RosterError::InvalidInput`] for an empty pool, zero stations, or a
///   duplicate official id.
/// - [`RosterError::InvalidOfficial`] for an official violating its bounds.
/// - [`RosterError::UnsatisfiableConstraint`] when there are fewer top-tier
///   officials than stations.
pub fn check_preconditions(officials: &[Official], station_count: usize) -> RosterResult<()> {
    if officials.is_empty() {
        return Err(RosterError::InvalidInput("official pool is empty".into()));
    }
    if station_count == 0 {
        return Err(RosterError::InvalidInput(
            "station count must be at least 1".into(),
        ));
    }

    let mut seen = HashSet::with_capacity(officials.len());
    for official in officials {
        official.validate()?;
        if !seen.insert(official.id.as_str()) {
            return Err(RosterError::InvalidInput(format!(
                "duplicate official id '{}'",
                official.id
            )));
        }
    }

    let top_tier = officials.iter().filter(|o| o.is_top_tier()).count();
    if top_tier < station_count {
        return Err(RosterError::UnsatisfiableConstraint {
            required: station_count,
            actual: top_tier,
        });
    }
    Ok(())
}

/// Runs one best-improvement sweep with the default weights.
///
/// Returns the best single relocation of `assignment`, or an unchanged copy
/// if `assignment` is already a local optimum.
pub fn improve_once(assignment: &Assignment) -> Assignment {
    improve_once_with(assignment, &QualityWeights::default())
}

/// Runs one best-improvement sweep with the given weights.
pub fn improve_once_with(assignment: &Assignment, weights: &QualityWeights) -> Assignment {
    let problem = RosterProblem::new(&assignment.pool, assignment.station_count(), *weights);
    let baseline = problem.cost(assignment);
    match DescentRunner::sweep(&problem, assignment, baseline) {
        Some((better, _)) => better,
        None => assignment.clone(),
    }
}

/// Assigns `officials` to `station_count` stations with the default
/// configuration.
///
/// # Examples
///
/// ```
/// use u_roster::model::Official;
/// use u_roster::roster::optimize;
///
/// let officials = vec![
///     Official::new("a", "A", 4, 10.0).unwrap(),
///     Official::new("b", "B", 4, 10.0).unwrap(),
///     Official::new("c", "C", 1, 5.0).unwrap(),
///     Official::new("d", "D", 1, 5.0).unwrap(),
/// ];
/// let result = optimize(&officials, 2).unwrap();
/// assert!(result.is_eligible());
/// assert!(result.quality.abs() < 1e-9);
/// ```
pub fn optimize(officials: &[Official], station_count: usize) -> RosterResult<Allocation> {
    optimize_with(officials, station_count, &RosterConfig::default())
}

/// Assigns `officials` to `station_count` stations.
///
/// The initial shuffle is seeded from `config.seed`, or from OS entropy
/// when unset.
pub fn optimize_with(
    officials: &[Official],
    station_count: usize,
    config: &RosterConfig,
) -> RosterResult<Allocation> {
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    optimize_with_rng(officials, station_count, config, &mut rng)
}

/// Assigns `officials` to `station_count` stations using `rng` for the
/// initial shuffle. `config.seed` is ignored.
pub fn optimize_with_rng<R: Rng>(
    officials: &[Official],
    station_count: usize,
    config: &RosterConfig,
    rng: &mut R,
) -> RosterResult<Allocation> {
    config.validate()?;
    check_preconditions(officials, station_count)?;

    info!(
        officials = officials.len(),
        stations = station_count,
        "starting roster optimization"
    );

    let problem = RosterProblem::new(officials, station_count, config.weights);
    let result = DescentRunner::run_with_rng(&problem, &config.descent_config(), rng);
    let (statistics, quality) = problem.evaluate(&result.best);

    info!(
        sweeps = result.sweeps,
        converged = result.converged,
        initial_quality = result.initial_cost,
        quality,
        "roster optimization finished"
    );
    let missing = statistics.stations_missing_top_tier();
    if missing > 0 {
        warn!(
            stations = missing,
            "best assignment leaves stations without a top-tier official"
        );
    }

    Ok(Allocation {
        assignment: result.best,
        statistics,
        quality,
        initial_quality: result.initial_cost,
        sweeps: result.sweeps,
        quality_history: result.cost_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_initial;

    fn pool(entries: &[(u8, f64)]) -> Vec<Official> {
        entries.iter()
            .enumerate()
            .map(|(i, &(tier, rating))| {
                Official::new(format!("r{i}"), format!("Ref {i}"), tier, rating).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_empty_pool_is_invalid_input() {
        let err = optimize(&[], 1).unwrap_err();
        assert!(matches!(err, RosterError::InvalidInput(_)), "got {err:?}");
    }

    #[test]
    fn test_zero_stations_is_invalid_input() {
        let officials = pool(&[(4, 9.0), (4, 8.0), (1, 5.0), (2, 6.0), (3, 7.0)]);
        let err = optimize(&officials, 0).unwrap_err();
        assert!(matches!(err, RosterError::InvalidInput(_)), "got {err:?}");
    }

    #[test]
    fn test_too_few_top_tier_is_unsatisfiable() {
        let mut entries = vec![(4, 9.0)];
        entries.extend(std::iter::repeat((2, 6.0)).take(9));
        let officials = pool(&entries);

        let err = optimize(&officials, 2).unwrap_err();
        assert_eq!(
            err,
            RosterError::UnsatisfiableConstraint {
                required: 2,
                actual: 1
            }
        );
        assert!(err.to_string().contains("need 2, have 1"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut officials = pool(&[(4, 9.0), (4, 8.0)]);
        officials[1].id = officials[0].id.clone();
        let err = optimize(&officials, 1).unwrap_err();
        assert!(matches!(err, RosterError::InvalidInput(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn test_out_of_range_official_rejected() {
        let mut officials = pool(&[(4, 9.0), (4, 8.0)]);
        officials[0].rating = 12.0;
        let err = optimize(&officials, 1).unwrap_err();
        assert!(matches!(err, RosterError::InvalidOfficial { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let officials = pool(&[(4, 9.0)]);
        let config = RosterConfig::default().with_max_sweeps(0);
        let err = optimize_with(&officials, 1, &config).unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));
    }

    #[test]
    fn test_two_top_tier_officials_are_split() {
        let officials = pool(&[(4, 10.0), (4, 10.0), (1, 5.0), (1, 5.0)]);
        for seed in 0..20 {
            let config = RosterConfig::default().with_seed(seed);
            let result = optimize_with(&officials, 2, &config).unwrap();
            let a = &result.assignment;

            assert_ne!(a.station_of("r0"), a.station_of("r1"), "seed {seed}");
            for score in &result.statistics.station_scores {
                assert!((score - 21.0).abs() < 1e-9, "seed {seed}: {score}");
            }
            assert!(result.statistics.std_dev.abs() < 1e-9);
            assert_eq!(result.statistics.count_spread, 0);
            assert!(result.quality.abs() < 1e-9, "seed {seed}: {}", result.quality);
        }
    }

    #[test]
    fn test_result_never_worse_than_initial() {
        let officials = pool(&[
            (4, 9.5),
            (4, 6.0),
            (4, 7.5),
            (3, 8.0),
            (3, 4.0),
            (2, 9.0),
            (2, 3.5),
            (1, 10.0),
            (1, 2.0),
            (1, 6.5),
        ]);
        let result = optimize_with(&officials, 3, &RosterConfig::default().with_seed(11)).unwrap();

        assert!(result.quality <= result.initial_quality);
        assert_eq!(result.quality_history.first().copied(), Some(result.initial_quality));
        assert_eq!(result.quality_history.last().copied(), Some(result.quality));
        assert!(result.sweeps <= 1000);
        assert!(result.assignment.is_complete_cover());
        assert!(result.is_eligible());
    }

    #[test]
    fn test_improve_once_is_idempotent_at_local_optimum() {
        let officials = pool(&[(4, 8.0), (4, 7.0), (2, 5.0), (1, 9.0), (3, 6.0)]);
        let result = optimize_with(&officials, 2, &RosterConfig::default().with_seed(5)).unwrap();

        let once = improve_once(&result.assignment);
        let twice = improve_once(&once);
        assert_eq!(once, result.assignment);
        assert_eq!(twice, result.assignment);
    }

    #[test]
    fn test_improve_once_does_not_mutate_input() {
        let officials = pool(&[(4, 10.0), (4, 10.0), (1, 5.0), (1, 5.0)]);
        let mut rng = StdRng::seed_from_u64(0);
        let start = generate_initial(&officials, 2, &mut rng);
        let snapshot = start.clone();

        let next = improve_once(&start);
        assert_eq!(start, snapshot);
        assert!(next.is_complete_cover());
    }

    #[test]
    fn test_injected_rng_is_reproducible() {
        let officials = pool(&[
            (4, 9.0),
            (4, 5.0),
            (4, 7.0),
            (2, 8.0),
            (1, 3.0),
            (3, 6.0),
            (2, 4.0),
        ]);
        let config = RosterConfig::default();
        let a = optimize_with_rng(&officials, 3, &config, &mut StdRng::seed_from_u64(21)).unwrap();
        let b = optimize_with_rng(&officials, 3, &config, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(a.assignment, b.assignment);
        assert_eq!(a.quality, b.quality);
    }

    #[test]
    fn test_sweep_cap_respected() {
        let officials = pool(&[(4, 10.0), (4, 10.0), (1, 5.0), (1, 5.0), (2, 7.0), (3, 2.0)]);
        let config = RosterConfig::default().with_seed(1).with_max_sweeps(1);
        let result = optimize_with(&officials, 2, &config).unwrap();
        assert_eq!(result.sweeps, 1);
        assert!(result.quality_history.len() <= 2);
    }

    #[test]
    fn test_breakdown_total_matches_quality() {
        let officials = pool(&[(4, 9.0), (4, 3.0), (2, 8.0), (1, 1.0)]);
        let config = RosterConfig::default().with_seed(2);
        let result = optimize_with(&officials, 2, &config).unwrap();
        let b = result.breakdown(&config.weights);
        assert!((b.total() - result.quality).abs() < 1e-9);
    }
}
