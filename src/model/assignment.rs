//! Stations and the assignment partition.

use std::collections::HashMap;

use super::official::Official;

/// A unit of work capacity receiving a subset of officials.
///
/// The order of `officials` carries no meaning beyond fixing the move
/// enumeration order during search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: String,
    pub name: String,
    pub officials: Vec<Official>,
}

impl Station {
    /// Creates an empty station numbered from 1 (`station-1`, `Station 1`).
    pub fn numbered(number: usize) -> Self {
        Self {
            id: format!("station-{number}"),
            name: format!("Station {number}"),
            officials: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.officials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.officials.is_empty()
    }

    /// Number of top-tier officials on this station.
    pub fn top_tier_count(&self) -> usize {
        self.officials.iter().filter(|o| o.is_top_tier()).count()
    }
}

/// A partition of the official pool across stations.
///
/// Invariant: every official of `pool` appears in exactly one station.
/// The pool is kept alongside the partition for validation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub stations: Vec<Station>,
    pub pool: Vec<Official>,
}

impl Assignment {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns a copy with the official at `index` on station `from` moved to
    /// the end of station `to`. `self` is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `from`, `to`, or `index` is out of bounds.
    pub fn relocate(&self, from: usize, index: usize, to: usize) -> Assignment {
        let mut next = self.clone();
        let official = next.stations[from].officials.remove(index);
        next.stations[to].officials.push(official);
        next
    }

    /// Checks that the stations form a complete, disjoint cover of the pool.
    ///
    /// Identity is by official id, counted as a multiset so that both
    /// duplicates and omissions are detected.
    pub fn is_complete_cover(&self) -> bool {
        let mut balance: HashMap<&str, i64> = HashMap::with_capacity(self.pool.len());
        for official in &self.pool {
            *balance.entry(official.id.as_str()).or_default() += 1;
        }
        for official in self.stations.iter().flat_map(|s| &s.officials) {
            *balance.entry(official.id.as_str()).or_default() -= 1;
        }
        balance.values().all(|&n| n == 0)
    }

    /// Index of the station holding the official with `id`.
    pub fn station_of(&self, id: &str) -> Option<usize> {
        self.stations
            .iter()
            .position(|s| s.officials.iter().any(|o| o.id == id))
    }
}
