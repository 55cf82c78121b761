//! Individual and station scores.

use crate::model::{Official, Station};

/// Weighted score of one official: `weight(tier) * rating`.
///
/// # Examples
///
/// ```
/// use u_roster::model::Official;
/// use u_roster::scoring::official_score;
///
/// let top = Official::new("r1", "Alice", 4, 10.0).unwrap();
/// assert!((official_score(&top) - 16.0).abs() < 1e-12);
/// ```
pub fn official_score(official: &Official) -> f64 {
    official.tier.weight() * official.rating
}

/// Aggregate score of a station. An empty station scores 0.
pub fn station_score(station: &Station) -> f64 {
    station.officials.iter().map(official_score).sum()
}
