//! Core domain types for the Detour engine.
//!
//! The engine plans a single route from a fixed start to a fixed end that
//! picks up and drops off as many optional stops as a detour budget allows.
//! This crate holds the vocabulary shared by solvers and adapters:
//! coordinates, stops, candidate sequences, the distance model, and the
//! [`Solver`] boundary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod budget;
pub mod coordinate;
pub mod distance;
pub mod sequence;
pub mod solver;
pub mod stop;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod wire;

pub use budget::DetourBudget;
pub use coordinate::Coordinate;
pub use distance::{DistanceModel, Haversine};
pub use sequence::{SequenceError, StopSequence, Waypoint};
pub use solver::{
    Diagnostics, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse, Solver,
};
pub use stop::{Leg, Stop};
#[cfg(feature = "serde")]
pub use wire::{Location, RoutePath, RouteRequest, WireError};
