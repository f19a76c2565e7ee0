#![expect(
    clippy::expect_used,
    reason = "regression tests use expect for readable failures"
)]

//! Golden routes regression tests for the insertion solver.
//!
//! Each test loads a request document from JSON, solves it with the default
//! haversine solver, and verifies the path, the served stops and the route
//! length against recorded values.
//!
//! These tests guard against regressions in the solver's behaviour by asserting
//! that well-defined, small problem instances produce consistent results.


use detour_core::{Haversine, RoutePath};
use rstest::rstest;

use golden_routes_support::{
    DISTANCE_TOLERANCE_KM, build_request, load_golden_route, solve_golden_route,
};

#[rstest]
#[case("direct_route")]
#[case("midpoint_stop")]
#[case("equator_chain")]
#[case("unreachable_stop")]
#[case("bruges_sample")]
#[case("bruges_evening")]
fn golden_route_regression(#[case] name: &str) {
    let golden = load_golden_route(name);
    let request = build_request(&golden);
    let response = solve_golden_route(&golden);

    assert_eq!(
        response.path,
        golden.expected.coordinates(),
        "{}: path mismatch",
        golden.name
    );
    assert_eq!(
        response.served_stop_ids, golden.expected.served_stop_ids,
        "{}: served stop mismatch",
        golden.name
    );
    assert!(
        (response.total_distance - golden.expected.total_distance_km).abs()
            <= DISTANCE_TOLERANCE_KM,
        "{}: distance {} differs from {}",
        golden.name,
        response.total_distance,
        golden.expected.total_distance_km
    );

    if !response.served_stop_ids.is_empty() {
        let budget = request.budget(&Haversine);
        assert!(
            budget.admits(response.total_distance),
            "{}: route of {} km exceeds budget {} km",
            golden.name,
            response.total_distance,
            budget.max_distance()
        );
    }
}

#[rstest]
#[case("direct_route")]
#[case("bruges_evening")]
fn golden_route_serialises_as_coordinate_pairs(#[case] name: &str) {
    let golden = load_golden_route(name);
    let response = solve_golden_route(&golden);

    let json = serde_json::to_value(RoutePath::from(&response)).expect("serialise path");
    let expected = serde_json::to_value(&golden.expected.path).expect("serialise expected");
    assert_eq!(json, expected);
}
