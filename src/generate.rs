//! Initial assignment construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Assignment, Official, Station};

/// Builds a randomized initial assignment.
///
/// Creates `station_count` empty stations (`station-1`, `station-2`, ...),
/// shuffles the pool uniformly, and deals officials round-robin: the official
/// at shuffled position `i` goes to station `i % station_count`. Headcounts
/// therefore differ by at most one. Eligibility and balance are left to the
/// improver.
///
/// # Panics
///
/// Panics if `station_count` is zero.
pub fn generate_initial<R: Rng + ?Sized>(
    officials: &[Official],
    station_count: usize,
    rng: &mut R,
) -> Assignment {
    assert!(station_count > 0, "station_count must be at least 1");

    let mut stations: Vec<Station> = (1..=station_count).map(Station::numbered).collect();

    let mut shuffled = officials.to_vec();
    shuffled.shuffle(rng);
    for (i, official) in shuffled.into_iter().enumerate() {
        stations[i % station_count].officials.push(official);
    }

    Assignment {
        stations,
        pool: officials.to_vec(),
    }
}
