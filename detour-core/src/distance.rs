//! Great-circle distance between coordinates.
//!
//! The [`DistanceModel`] trait abstracts the metric used by solvers so tests
//! can substitute a planar model with exact arithmetic. Production code uses
//! [`Haversine`], which measures kilometres on a sphere of radius
//! [`EARTH_RADIUS_KM`].

use geo::{Distance as _, HaversineMeasure, Point};

use crate::Coordinate;

/// Sphere radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const METRES_PER_KM: f64 = 1000.0;

/// Great-circle distance in kilometres between two coordinates.
///
/// Delegates to [`geo::HaversineMeasure`] on a sphere of radius
/// [`EARTH_RADIUS_KM`]. The result is symmetric and exactly zero for
/// identical inputs. Inputs are not range-checked.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, distance::haversine_km};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let one_degree_east = Coordinate::new(0.0, 1.0);
/// let km = haversine_km(origin, one_degree_east);
/// assert!((km - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "geo measures in metres; the engine works in kilometres"
)]
pub fn haversine_km(origin: Coordinate, destination: Coordinate) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM * METRES_PER_KM)
        .distance(Point::from(origin), Point::from(destination))
        / METRES_PER_KM
}

/// Measure the distance between two coordinates.
///
/// Implementations must be symmetric, non-negative, and return zero for
/// identical coordinates. Solvers rely on the triangle inequality when
/// treating the direct route as the feasible baseline.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, DistanceModel, Haversine};
///
/// let a = Coordinate::new(51.10, 3.26);
/// let b = Coordinate::new(51.13, 3.33);
/// assert_eq!(Haversine.distance(a, b), Haversine.distance(b, a));
/// ```
pub trait DistanceModel: Send + Sync {
    /// Return the distance from `from` to `to`.
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// Haversine great-circle distance in kilometres.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Haversine;

impl DistanceModel for Haversine {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_km(from, to)
    }
}
