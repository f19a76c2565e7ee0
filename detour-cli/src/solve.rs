//! Solve command implementation for the Detour CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use detour_core::{Haversine, RoutePath, RouteRequest, SolveRequest, SolveResponse, Solver};
use detour_fs::read_utf8_to_string;
use detour_solver::{InsertionSolver, InsertionSolverConfig, MAX_ROUNDS};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_SOLVE_DETAILED, ARG_SOLVE_MAX_ROUNDS, ARG_SOLVE_REQUEST, CliError, ENV_SOLVE_REQUEST};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a route request. The request is a JSON document with \
                 `start`, `end`, `kappa` and `locations`, where each location \
                 carries a pickup and a drop-off coordinate and a timestamp. \
                 The planned path is printed as an array of [lat, lng] pairs.",
    about = "Plan a route through as many stops as the detour budget allows"
)]
#[ortho_config(prefix = "DETOUR")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing the route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Upper bound on search rounds; each round adds at most one stop.
    #[arg(long = ARG_SOLVE_MAX_ROUNDS, value_name = "rounds")]
    #[serde(default)]
    pub(crate) max_rounds: Option<usize>,
    /// Print the full solve response instead of the bare path.
    #[arg(long = ARG_SOLVE_DETAILED)]
    #[serde(default)]
    pub(crate) detailed: bool,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Search round bound handed to the solver.
    pub(crate) max_rounds: usize,
    /// Whether to print the full response.
    pub(crate) detailed: bool,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SOLVE_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match detour_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            max_rounds: args.max_rounds.unwrap_or(MAX_ROUNDS),
            detailed: args.detailed,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        let solver_config = InsertionSolverConfig {
            max_rounds: config.max_rounds,
        };
        Ok(Box::new(InsertionSolver::with_config(
            Haversine,
            solver_config,
        )))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let response = execute_solve(&config, builder)?;
    write_solve_response(writer, &response, config.detailed)
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolveSolverBuilder,
) -> Result<SolveResponse, CliError> {
    let request = load_solve_request(&config.request_path)?;
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidSolveRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let solver = builder.build(config)?;
    let response = solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    log::debug!(
        "served {} of {} stops over {:.3} km in {:?}",
        response.served_stop_ids.len(),
        request.stops.len(),
        response.total_distance,
        response.diagnostics.solve_time
    );
    Ok(response)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    log::debug!("resolved solve configuration: {config:?}");
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON route request from disk and converts it for the solver.
pub(super) fn load_solve_request(path: &Utf8Path) -> Result<SolveRequest, CliError> {
    let contents = read_utf8_to_string(path).map_err(|source| CliError::OpenSolveRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let document: RouteRequest =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseSolveRequest {
            path: path.to_path_buf(),
            source,
        })?;
    SolveRequest::try_from(document).map_err(|source| CliError::InvalidLocation {
        path: path.to_path_buf(),
        source,
    })
}

fn write_solve_response(
    writer: &mut dyn Write,
    response: &SolveResponse,
    detailed: bool,
) -> Result<(), CliError> {
    let payload = if detailed {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(&RoutePath::from(response))
    }
    .map_err(CliError::SerialiseSolveResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSolveOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSolveOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
