//! Geographic coordinates expressed as latitude/longitude degrees.

use geo::{Coord, Point};

/// A `(lat, lng)` pair in degrees.
///
/// Values are not range-checked; callers that accept external input should
/// run [`SolveRequest::validate`](crate::SolveRequest::validate) to reject
/// non-finite values.
///
/// # Examples
/// ```
/// use detour_core::Coordinate;
///
/// let bruges = Coordinate::new(51.2093, 3.2247);
/// let coord: geo::Coord<f64> = bruges.into();
/// assert_eq!(coord.x, 3.2247);
/// assert_eq!(coord.y, 51.2093);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Return `true` when both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::from(Coord::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn geo_round_trip_swaps_axes() {
        let original = Coordinate::new(51.1, 3.3);
        let coord: Coord<f64> = original.into();
        assert_eq!(coord, Coord { x: 3.3, y: 51.1 });
        assert_eq!(Coordinate::from(coord), original);
    }

    #[rstest]
    #[case(Coordinate::new(0.0, 0.0), true)]
    #[case(Coordinate::new(f64::NAN, 0.0), false)]
    #[case(Coordinate::new(0.0, f64::INFINITY), false)]
    fn finiteness_covers_both_axes(#[case] coordinate: Coordinate, #[case] expected: bool) {
        assert_eq!(coordinate.is_finite(), expected);
    }
}
