//! Test-only helpers shared by unit and behaviour tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{Coordinate, DistanceModel, Stop};

/// Construct a stop from `(lat, lng)` tuples.
///
/// # Examples
/// ```rust
/// use detour_core::test_support::stop;
///
/// let stop = stop(3, (0.0, 0.2), (0.0, 0.4), 1.5);
/// assert_eq!(stop.id, 3);
/// assert_eq!(stop.end.lng, 0.4);
/// ```
#[must_use]
pub const fn stop(id: usize, start: (f64, f64), end: (f64, f64), age: f64) -> Stop {
    Stop::new(
        id,
        Coordinate::new(start.0, start.1),
        Coordinate::new(end.0, end.1),
        age,
    )
}

/// Deterministic `DistanceModel` measuring straight lines in degree space.
///
/// Treats `lat`/`lng` as planar axes so expected route lengths can be worked
/// out by hand in tests.
#[derive(Default, Debug, Copy, Clone)]
pub struct PlanarDistance;

impl DistanceModel for PlanarDistance {
    #[expect(
        clippy::float_arithmetic,
        reason = "Euclidean distance requires floating-point arithmetic"
    )]
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        (to.lat - from.lat).hypot(to.lng - from.lng)
    }
}
