//! Core trait for best-improvement descent.

use rand::Rng;

/// Defines a problem for best-improvement hill climbing.
///
/// The user supplies an initial solution, a cost function, and a
/// neighborhood expressed as a list of moves. The runner evaluates every
/// move of a sweep against an independent copy produced by [`apply`],
/// so a rejected candidate never leaks into later comparisons.
///
/// # Minimization
///
/// Descent minimizes the cost function. For maximization, negate the cost.
///
/// [`apply`]: DescentProblem::apply
pub trait DescentProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send + Sync;

    /// A single move in the neighborhood.
    type Move: Send + Sync;

    /// Creates an initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Enumerates the full neighborhood of `solution`.
    ///
    /// The order must be deterministic: ties between equally good
    /// candidates are broken in favor of the earliest move.
    fn moves(&self, solution: &Self::Solution) -> Vec<Self::Move>;

    /// Returns a new solution with `mv` applied, leaving `solution` intact.
    fn apply(&self, solution: &Self::Solution, mv: &Self::Move) -> Self::Solution;
}
