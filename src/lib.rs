//! Facade crate for the Detour routing engine.
//!
//! This crate re-exports the core domain types and exposes the insertion
//! solver behind a feature flag.

#![forbid(unsafe_code)]

pub use detour_core::{
    Coordinate, DetourBudget, Diagnostics, DistanceModel, Haversine, SequenceError, SolveError,
    SolveRequest, SolveRequestValidationError, SolveResponse, Solver, Stop, StopSequence,
};

#[cfg(feature = "serde")]
pub use detour_core::{RoutePath, RouteRequest, WireError};

#[cfg(feature = "solver-insertion")]
pub use detour_solver::{InsertionSolver, InsertionSolverConfig};
