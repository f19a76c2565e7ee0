//! Greedy insertion solver for Detour.
//!
//! This crate provides [`InsertionSolver`], the default implementation of the
//! [`Solver`](detour_core::Solver) trait. It treats detour planning as a
//! single-vehicle pickup-and-delivery problem with a cardinality-first
//! objective: serve as many stops as possible, and among routes serving the
//! same number prefer the shortest.
//!
//! The search is a heuristic. Each round inserts at most one stop (its pickup
//! and drop-off) into the incumbent route at the best feasible positions, so
//! the number of rounds bounds the number of stops served. The building
//! blocks are public for callers that want to drive the search directly:
//! [`CostEvaluator`] scores candidates, [`InsertionSearch`] runs the rounds
//! and [`reconstruct`] turns a sequence into coordinates.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod evaluate;
mod reconstruct;
mod search;
mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use evaluate::{CostEvaluator, Evaluation};
pub use reconstruct::{full_path, reconstruct};
pub use search::{InsertionSearch, MAX_ROUNDS, SearchResult};
pub use solver::{InsertionSolver, InsertionSolverConfig};
