//! `InsertionSolver`: the greedy insertion search behind the [`Solver`] trait.

use std::time::Instant;

use detour_core::{
    Diagnostics, DistanceModel, Haversine, SolveError, SolveRequest, SolveResponse, Solver,
};

use crate::evaluate::CostEvaluator;
use crate::reconstruct::full_path;
use crate::search::{InsertionSearch, MAX_ROUNDS};

/// Configuration for [`InsertionSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionSolverConfig {
    /// Upper bound on search rounds. Each round adds at most one stop.
    pub max_rounds: usize,
}

impl Default for InsertionSolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Solver serving as many stops as the detour budget allows.
///
/// The solver is generic over the [`DistanceModel`] used for both the budget
/// and candidate scoring; it defaults to great-circle [`Haversine`] distance.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, Haversine, SolveRequest, Solver};
/// use detour_solver::InsertionSolver;
///
/// let solver = InsertionSolver::new(Haversine);
/// let request = SolveRequest {
///     start: Coordinate::new(0.0, 0.0),
///     end: Coordinate::new(0.0, 1.0),
///     kappa: 0.0,
///     stops: Vec::new(),
/// };
/// let response = solver.solve(&request)?;
/// assert_eq!(response.path, vec![request.start, request.end]);
/// # Ok::<(), detour_core::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InsertionSolver<D = Haversine> {
    model: D,
    config: InsertionSolverConfig,
}

impl<D> InsertionSolver<D>
where
    D: DistanceModel,
{
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(model: D) -> Self {
        Self::with_config(model, InsertionSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(model: D, config: InsertionSolverConfig) -> Self {
        Self { model, config }
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> InsertionSolverConfig {
        self.config
    }
}

impl<D> Solver for InsertionSolver<D>
where
    D: DistanceModel,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        request.validate()?;
        let started_at = Instant::now();

        let budget = request.budget(&self.model);
        let evaluator = CostEvaluator::new(&self.model, request.start, request.end, budget);
        log::debug!(
            "solving with {} stops, budget {:.6}, at most {} rounds",
            request.stops.len(),
            budget.max_distance(),
            self.config.max_rounds
        );
        let result = InsertionSearch::new(&evaluator, self.config.max_rounds).run(&request.stops);

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            rounds: result.rounds,
            candidates_evaluated: result.candidates_evaluated,
        };
        Ok(SolveResponse {
            path: full_path(request.start, request.end, &result.sequence),
            served_stop_ids: result.sequence.served_stop_ids(),
            total_distance: result.distance,
            diagnostics,
        })
    }
}
