//! Benchmark support utilities for the insertion solver.
//!
//! Provides deterministic stop generation around a fixed urban corridor for
//! reproducible benchmarks.

use detour_core::{Coordinate, SolveRequest, Stop};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Corridor start, roughly central Bruges.
pub const CORRIDOR_START: Coordinate = Coordinate::new(51.2050, 3.2100);

/// Corridor end, about five kilometres north-east of the start.
pub const CORRIDOR_END: Coordinate = Coordinate::new(51.2350, 3.2600);

/// Margin around the corridor's bounding box (in degrees).
const MARGIN: f64 = 0.02;

/// Detour factor used by benchmark requests.
pub const BENCHMARK_KAPPA: f64 = 0.6;

/// Generate `count` stops scattered around the corridor.
///
/// Ages are drawn uniformly from one hour. Uses a deterministic seeded RNG for
/// reproducibility.
#[must_use]
pub fn generate_corridor_stops(count: usize, seed: u64) -> Vec<Stop> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let start = random_coordinate(&mut rng);
            let end = random_coordinate(&mut rng);
            let age = rng.gen_range(0.0..3600.0);
            Stop::new(id, start, end, age)
        })
        .collect()
}

/// Build a corridor request over `stops`.
#[must_use]
pub const fn build_benchmark_request(stops: Vec<Stop>) -> SolveRequest {
    SolveRequest {
        start: CORRIDOR_START,
        end: CORRIDOR_END,
        kappa: BENCHMARK_KAPPA,
        stops,
    }
}

#[expect(clippy::float_arithmetic, reason = "Required for bounding box margins")]
fn random_coordinate(rng: &mut ChaCha8Rng) -> Coordinate {
    let lat = rng.gen_range((CORRIDOR_START.lat - MARGIN)..(CORRIDOR_END.lat + MARGIN));
    let lng = rng.gen_range((CORRIDOR_START.lng - MARGIN)..(CORRIDOR_END.lng + MARGIN));
    Coordinate::new(lat, lng)
}
