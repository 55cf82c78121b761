//! Best-improvement descent execution engine.
//!
//! # Algorithm
//!
//! 1. Generate initial solution x
//! 2. Repeat up to `max_sweeps` times:
//!    a. Evaluate every move of the neighborhood of x on an independent copy
//!    b. Keep the candidate with the strictly lowest cost (earliest on ties)
//!    c. If it improves on x, set x to it; otherwise stop (local optimum)
//! 3. Return x
//!
//! Each sweep costs `|moves|` evaluations. Accepted costs are strictly
//! decreasing, so the cost history is monotone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::DescentConfig;
use super::types::DescentProblem;

/// Result of a descent run.
#[derive(Debug, Clone)]
pub struct DescentResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Cost of the initial solution.
    pub initial_cost: f64,
    /// Sweeps executed, including the final non-improving one.
    pub sweeps: usize,
    /// `true` if the run stopped at a local optimum rather than the sweep cap.
    pub converged: bool,
    /// Cost after each accepted sweep, starting with the initial cost.
    pub cost_history: Vec<f64>,
}

/// Best-improvement descent runner.
pub struct DescentRunner;

impl DescentRunner {
    /// Runs one sweep over the full neighborhood of `solution`.
    ///
    /// Returns the best candidate whose cost is strictly below `cost`, or
    /// `None` if `solution` is a local optimum.
    pub fn sweep<P: DescentProblem>(
        problem: &P,
        solution: &P::Solution,
        cost: f64,
    ) -> Option<(P::Solution, f64)> {
        let moves = problem.moves(solution);
        best_candidate(problem, solution, &moves, cost)
    }

    /// Executes descent, seeding the initial solution from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roster::descent::{DescentConfig, DescentProblem, DescentRunner};
    /// use rand::Rng;
    ///
    /// struct Walk;
    /// impl DescentProblem for Walk {
    ///     type Solution = i32;
    ///     type Move = i32;
    ///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> i32 { 20 }
    ///     fn cost(&self, x: &i32) -> f64 { f64::from((x - 3).abs()) }
    ///     fn moves(&self, _x: &i32) -> Vec<i32> { vec![-1, 1] }
    ///     fn apply(&self, x: &i32, step: &i32) -> i32 { x + step }
    /// }
    ///
    /// let result = DescentRunner::run(&Walk, &DescentConfig::default());
    /// assert_eq!(result.best, 3);
    /// assert!(result.converged);
    /// ```
    pub fn run<P: DescentProblem>(problem: &P, config: &DescentConfig) -> DescentResult<P::Solution> {
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Executes descent with a caller-supplied random source.
    pub fn run_with_rng<P: DescentProblem, R: Rng>(
        problem: &P,
        config: &DescentConfig,
        rng: &mut R,
    ) -> DescentResult<P::Solution> {
        let initial = problem.initial_solution(rng);
        let initial_cost = problem.cost(&initial);
        Self::descend(problem, config, initial, initial_cost)
    }

    /// Improves `start` until a local optimum or the sweep cap.
    pub fn descend<P: DescentProblem>(
        problem: &P,
        config: &DescentConfig,
        start: P::Solution,
        start_cost: f64,
    ) -> DescentResult<P::Solution> {
        let mut current = start;
        let mut current_cost = start_cost;
        let mut cost_history = vec![start_cost];
        let mut sweeps = 0;
        let mut converged = false;

        while sweeps < config.max_sweeps {
            sweeps += 1;
            match Self::sweep(problem, &current, current_cost) {
                Some((candidate, cost)) => {
                    debug!(sweep = sweeps, cost, "sweep accepted");
                    current = candidate;
                    current_cost = cost;
                    cost_history.push(cost);
                }
                None => {
                    converged = true;
                    break;
                }
            }
        }

        DescentResult {
            best: current,
            best_cost: current_cost,
            initial_cost: start_cost,
            sweeps,
            converged,
            cost_history,
        }
    }
}

/// Strictly best candidate below `cost`; ties keep the earliest move.
#[cfg(not(feature = "parallel"))]
fn best_candidate<P: DescentProblem>(
    problem: &P,
    solution: &P::Solution,
    moves: &[P::Move],
    cost: f64,
) -> Option<(P::Solution, f64)> {
    let mut best: Option<(P::Solution, f64)> = None;
    let mut best_cost = cost;
    for mv in moves {
        let candidate = problem.apply(solution, mv);
        let c = problem.cost(&candidate);
        if c < best_cost {
            best_cost = c;
            best = Some((candidate, c));
        }
    }
    best
}

/// Parallel evaluation with the same selection as the sequential path.
#[cfg(feature = "parallel")]
fn best_candidate<P: DescentProblem>(
    problem: &P,
    solution: &P::Solution,
    moves: &[P::Move],
    cost: f64,
) -> Option<(P::Solution, f64)> {
    use rayon::prelude::*;

    let costs: Vec<f64> = moves
        .par_iter()
        .map(|mv| problem.cost(&problem.apply(solution, mv)))
        .collect();

    let mut best: Option<(usize, f64)> = None;
    let mut best_cost = cost;
    for (i, &c) in costs.iter().enumerate() {
        if c < best_cost {
            best_cost = c;
            best = Some((i, c));
        }
    }
    best.map(|(i, c)| (problem.apply(solution, &moves[i]), c))
}
