//! Solver boundary: requests, responses and the [`Solver`] trait.

use std::time::Duration;

use thiserror::Error;

use crate::{Coordinate, DetourBudget, DistanceModel, Stop};

/// Parameters for a solve request.
///
/// The request captures the fixed endpoints, the detour factor and the
/// optional stops. Stop ages are derived by the caller; see
/// [`RouteRequest`](crate::RouteRequest) for the JSON adapter.
///
/// # Examples
/// ```rust
/// use detour_core::{Coordinate, SolveRequest};
///
/// let request = SolveRequest {
///     start: Coordinate::new(0.0, 0.0),
///     end: Coordinate::new(0.0, 1.0),
///     kappa: 0.5,
///     stops: Vec::new(),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Fixed start location.
    pub start: Coordinate,
    /// Fixed end location.
    pub end: Coordinate,
    /// Detour factor: the route may be `(1 + kappa)` times the direct distance.
    pub kappa: f64,
    /// Optional stops in input order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stops: Vec<Stop>,
}

/// Detailed validation failures for [`SolveRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveRequestValidationError {
    /// `kappa` was NaN or infinite.
    #[error("kappa must be a finite number, got {kappa}")]
    NonFiniteKappa {
        /// Rejected value.
        kappa: f64,
    },
    /// `kappa` was below zero.
    #[error("kappa must not be negative, got {kappa}")]
    NegativeKappa {
        /// Rejected value.
        kappa: f64,
    },
    /// The start or end coordinate was not finite.
    #[error("{field} coordinate must be finite")]
    NonFiniteEndpoint {
        /// Either `"start"` or `"end"`.
        field: &'static str,
    },
    /// A stop coordinate was not finite.
    #[error("stop {id} has a non-finite coordinate")]
    NonFiniteStopCoordinate {
        /// Identifier of the offending stop.
        id: usize,
    },
    /// A stop age was not finite.
    #[error("stop {id} has a non-finite age")]
    NonFiniteStopAge {
        /// Identifier of the offending stop.
        id: usize,
    },
}

impl SolveRequest {
    /// Validate the request, collapsing failures into [`SolveError`].
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidRequest`] when any check in
    /// [`validate_detailed`](Self::validate_detailed) fails.
    pub fn validate(&self) -> Result<(), SolveError> {
        self.validate_detailed()
            .map_err(|_| SolveError::InvalidRequest)
    }

    /// Validate the request and report the first failing check.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveRequestValidationError`] describing the problem.
    pub fn validate_detailed(&self) -> Result<(), SolveRequestValidationError> {
        if !self.kappa.is_finite() {
            return Err(SolveRequestValidationError::NonFiniteKappa { kappa: self.kappa });
        }
        if self.kappa < 0.0 {
            return Err(SolveRequestValidationError::NegativeKappa { kappa: self.kappa });
        }
        if !self.start.is_finite() {
            return Err(SolveRequestValidationError::NonFiniteEndpoint { field: "start" });
        }
        if !self.end.is_finite() {
            return Err(SolveRequestValidationError::NonFiniteEndpoint { field: "end" });
        }
        for stop in &self.stops {
            if !(stop.start.is_finite() && stop.end.is_finite()) {
                return Err(SolveRequestValidationError::NonFiniteStopCoordinate { id: stop.id });
            }
            if !stop.age.is_finite() {
                return Err(SolveRequestValidationError::NonFiniteStopAge { id: stop.id });
            }
        }
        Ok(())
    }

    /// The detour budget implied by `kappa` under `model`.
    #[must_use]
    pub fn budget<D>(&self, model: &D) -> DetourBudget
    where
        D: DistanceModel + ?Sized,
    {
        DetourBudget::from_kappa(model, self.start, self.end, self.kappa)
    }
}

/// Diagnostic information about a solve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Search rounds executed.
    pub rounds: usize,
    /// Candidate sequences scored.
    pub candidates_evaluated: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// `[start] + waypoints + [end]`.
    pub path: Vec<Coordinate>,
    /// Identifiers of the stops served, in pickup order.
    pub served_stop_ids: Vec<usize>,
    /// Length of `path` under the solver's distance model.
    pub total_distance: f64,
    /// Statistics about the search.
    pub diagnostics: Diagnostics,
}

impl SolveResponse {
    /// Coordinates between the fixed endpoints.
    #[must_use]
    pub fn waypoints(&self) -> &[Coordinate] {
        let inner_end = self.path.len().saturating_sub(1);
        self.path.get(1..inner_end).unwrap_or_default()
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Request parameters were invalid, e.g. a negative `kappa`.
    #[error("invalid request")]
    InvalidRequest,
}

/// Find a route through as many stops as the detour budget allows.
///
/// Implementations should return [`SolveError::InvalidRequest`] for invalid
/// parameters rather than panicking. An infeasible request is not an error:
/// solvers return the direct route instead.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a route or an error.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}
