//! Command-line interface for the Detour engine.
//!
//! `detour solve <request.json>` reads a route request in the JSON wire
//! format, runs the insertion solver and prints the planned path.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;
use solve::SolveArgs;

pub(crate) const ARG_SOLVE_REQUEST: &str = "request-path";
pub(crate) const ARG_SOLVE_MAX_ROUNDS: &str = "max-rounds";
pub(crate) const ARG_SOLVE_DETAILED: &str = "detailed";
pub(crate) const ENV_SOLVE_REQUEST: &str = "DETOUR_CMDS_SOLVE_REQUEST_PATH";

/// Run the Detour CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, request
/// loading, solving or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "detour",
    about = "Plan a route that serves as many optional stops as a detour budget allows",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a route request stored as JSON.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
