//! Shared test harness modules for the Detour CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::solve::{
    SolveConfig, SolveSolverBuilder, config_from_layers_for_test, load_solve_request,
    run_solve_with,
};

mod helpers;
