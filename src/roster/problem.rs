//! The station assignment problem as a descent problem.

use rand::Rng;

use crate::descent::DescentProblem;
use crate::generate::generate_initial;
use crate::model::{Assignment, Official};
use crate::quality::{quality, QualityWeights};
use crate::stats::{compute_statistics, Statistics};

/// Moves the official at `index` on station `from` to the end of station `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub from: usize,
    pub index: usize,
    pub to: usize,
}

/// Assigning a fixed pool of officials to `station_count` stations.
///
/// The neighborhood of an assignment is every single-official relocation,
/// enumerated by source station, then official, then destination, all in
/// list order.
#[derive(Debug, Clone)]
pub struct RosterProblem<'a> {
    officials: &'a [Official],
    station_count: usize,
    weights: QualityWeights,
}

impl<'a> RosterProblem<'a> {
    pub fn new(officials: &'a [Official], station_count: usize, weights: QualityWeights) -> Self {
        Self {
            officials,
            station_count,
            weights,
        }
    }

    pub fn weights(&self) -> &QualityWeights {
        &self.weights
    }

    /// Statistics and quality of an assignment.
    pub fn evaluate(&self, assignment: &Assignment) -> (Statistics, f64) {
        let stats = compute_statistics(assignment);
        let q = quality(&stats, &self.weights);
        (stats, q)
    }
}

impl DescentProblem for RosterProblem<'_> {
    type Solution = Assignment;
    type Move = Relocation;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        generate_initial(self.officials, self.station_count, rng)
    }

    fn cost(&self, assignment: &Assignment) -> f64 {
        quality(&compute_statistics(assignment), &self.weights)
    }

    fn moves(&self, assignment: &Assignment) -> Vec<Relocation> {
        let n = assignment.station_count();
        let mut moves = Vec::with_capacity(assignment.pool.len() * n.saturating_sub(1));
        for (from, station) in assignment.stations.iter().enumerate() {
            for index in 0..station.len() {
                moves.extend(
                    (0..n)
                        .filter(|&to| to != from)
                        .map(|to| Relocation { from, index, to }),
                );
            }
        }
        moves
    }

    fn apply(&self, assignment: &Assignment, mv: &Relocation) -> Assignment {
        assignment.relocate(mv.from, mv.index, mv.to)
    }
}
