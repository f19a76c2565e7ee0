//! JSON wire format for route requests and paths.
//!
//! A [`RouteRequest`] mirrors the document accepted from clients: fixed
//! endpoints, a detour factor and a list of locations, each carrying a pickup
//! and drop-off coordinate plus a `time`. Converting it into a
//! [`SolveRequest`] derives each stop's age as `max(time) - time`.
//!
//! A [`RoutePath`] is the response document: `[lat, lng]` pairs from start to
//! end.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinate, SolveRequest, SolveResponse, Stop};

/// Errors raised while converting wire documents into domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// A location did not carry exactly a pickup and a drop-off coordinate.
    #[error("location {index} must have exactly 2 coordinates, found {found}")]
    CoordinateCount {
        /// Position of the location in the request.
        index: usize,
        /// Number of coordinates supplied.
        found: usize,
    },
    /// A location's `time` was not a finite number.
    #[error("location {index} has a non-finite time")]
    NonFiniteTime {
        /// Position of the location in the request.
        index: usize,
    },
}

/// A stop as submitted by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Pickup followed by drop-off.
    pub coordinate: Vec<Coordinate>,
    /// Submission time; smaller values are older.
    pub time: f64,
}

/// A route request as submitted by clients.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, RouteRequest, SolveRequest};
///
/// let json = r#"{
///     "start": {"lat": 0.0, "lng": 0.0},
///     "end": {"lat": 0.0, "lng": 1.0},
///     "kappa": 0.5,
///     "locations": [
///         {"coordinate": [{"lat": 0.0, "lng": 0.2}, {"lat": 0.0, "lng": 0.4}], "time": 3},
///         {"coordinate": [{"lat": 0.0, "lng": 0.6}, {"lat": 0.0, "lng": 0.8}], "time": 10}
///     ]
/// }"#;
/// let wire: RouteRequest = serde_json::from_str(json)?;
/// let request = SolveRequest::try_from(wire)?;
/// let ages: Vec<f64> = request.stops.iter().map(|s| s.age).collect();
/// assert_eq!(ages, vec![7.0, 0.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Fixed start location.
    pub start: Coordinate,
    /// Fixed end location.
    pub end: Coordinate,
    /// Detour factor.
    pub kappa: f64,
    /// Optional stops in input order.
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl TryFrom<RouteRequest> for SolveRequest {
    type Error = WireError;

    fn try_from(wire: RouteRequest) -> Result<Self, Self::Error> {
        if let Some(index) = wire
            .locations
            .iter()
            .position(|location| !location.time.is_finite())
        {
            return Err(WireError::NonFiniteTime { index });
        }
        let max_time = wire
            .locations
            .iter()
            .map(|location| location.time)
            .fold(f64::NEG_INFINITY, f64::max);
        let stops = wire
            .locations
            .into_iter()
            .enumerate()
            .map(|(index, location)| location_to_stop(index, &location, max_time))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            start: wire.start,
            end: wire.end,
            kappa: wire.kappa,
            stops,
        })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "age is the difference of two floating-point times"
)]
fn location_to_stop(index: usize, location: &Location, max_time: f64) -> Result<Stop, WireError> {
    match location.coordinate.as_slice() {
        [pickup, drop_off] => Ok(Stop::new(
            index,
            *pickup,
            *drop_off,
            max_time - location.time,
        )),
        other => Err(WireError::CoordinateCount {
            index,
            found: other.len(),
        }),
    }
}

/// A path serialised as `[lat, lng]` pairs.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, RoutePath};
///
/// let path = RoutePath::from(&[Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)][..]);
/// assert_eq!(serde_json::to_string(&path)?, "[[0.0,0.0],[0.0,1.0]]");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(pub Vec<(f64, f64)>);

impl From<&[Coordinate]> for RoutePath {
    fn from(path: &[Coordinate]) -> Self {
        Self(path.iter().map(|c| (c.lat, c.lng)).collect())
    }
}

impl From<&SolveResponse> for RoutePath {
    fn from(response: &SolveResponse) -> Self {
        Self::from(response.path.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn location(coordinate: Vec<Coordinate>, time: f64) -> Location {
        Location { coordinate, time }
    }

    fn wire(locations: Vec<Location>) -> RouteRequest {
        RouteRequest {
            start: Coordinate::new(0.0, 0.0),
            end: Coordinate::new(0.0, 1.0),
            kappa: 0.5,
            locations,
        }
    }

    #[rstest]
    fn empty_locations_produce_no_stops() {
        let request = SolveRequest::try_from(wire(Vec::new())).expect("valid");
        assert!(request.stops.is_empty());
        assert_eq!(request.kappa, 0.5);
    }

    #[rstest]
    fn ids_follow_input_order() {
        let pair = vec![Coordinate::new(0.0, 0.1), Coordinate::new(0.0, 0.2)];
        let request = SolveRequest::try_from(wire(vec![
            location(pair.clone(), 1.0),
            location(pair, 1.0),
        ]))
        .expect("valid");
        let ids: Vec<usize> = request.stops.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(request.stops.iter().all(|s| s.age == 0.0));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn rejects_wrong_coordinate_count(#[case] count: usize) {
        let coords = vec![Coordinate::new(0.0, 0.0); count];
        let err = SolveRequest::try_from(wire(vec![location(coords, 0.0)]))
            .expect_err("wrong count");
        assert_eq!(
            err,
            WireError::CoordinateCount {
                index: 0,
                found: count
            }
        );
    }

    #[rstest]
    fn rejects_non_finite_time() {
        let pair = vec![Coordinate::new(0.0, 0.1), Coordinate::new(0.0, 0.2)];
        let err = SolveRequest::try_from(wire(vec![
            location(pair.clone(), 0.0),
            location(pair, f64::NAN),
        ]))
        .expect_err("nan time");
        assert_eq!(err, WireError::NonFiniteTime { index: 1 });
    }

    #[rstest]
    fn parses_the_client_document_shape() {
        let json = r#"{
            "locations": [
                {"coordinate": [{"lat": 51.108803291433134, "lng": 3.275556564331055},
                                {"lat": 51.13099991299968, "lng": 3.317785263061524}], "time": 0},
                {"coordinate": [{"lat": 51.1335852335762, "lng": 3.32636833190918},
                                {"lat": 51.11257531414125, "lng": 3.2719516754150395}], "time": 1}
            ],
            "start": {"lat": 51.104956, "lng": 3.26724},
            "end": {"lat": 51.13886314700496, "lng": 3.335552215576172},
            "kappa": 0.5
        }"#;
        let wire: RouteRequest = serde_json::from_str(json).expect("valid json");
        let request = SolveRequest::try_from(wire).expect("valid request");
        assert_eq!(request.stops.len(), 2);
        let first = request.stops.first().expect("first stop");
        assert_eq!(first.age, 1.0);
        assert_eq!(first.start, Coordinate::new(51.108803291433134, 3.275556564331055));
    }
}
