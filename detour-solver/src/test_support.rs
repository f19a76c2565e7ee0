//! Test-only utilities for `detour-solver`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use detour_core::{Coordinate, DistanceModel, SolveRequest, Stop};

/// A [`DistanceModel`] returning distances from a fixed table.
///
/// Each coordinate passed to [`DistanceModel::distance`] must equal one of
/// the registered points exactly. Unregistered coordinates are logged and
/// treated as unreachable (`f64::INFINITY`), which makes any route through
/// them exceed every budget.
///
/// # Examples
///
/// ```rust
/// use detour_core::{Coordinate, DistanceModel};
/// use detour_solver::test_support::LookupDistance;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(1.0, 1.0);
/// let model = LookupDistance::new(vec![a, b], vec![vec![0.0, 3.0], vec![4.0, 0.0]]);
/// assert_eq!(model.distance(a, b), 3.0);
/// assert_eq!(model.distance(b, a), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct LookupDistance {
    points: Vec<Coordinate>,
    table: Vec<Vec<f64>>,
}

impl LookupDistance {
    /// Create a model over `points`, where `table[i][j]` is the distance
    /// from `points[i]` to `points[j]`.
    #[must_use]
    pub const fn new(points: Vec<Coordinate>, table: Vec<Vec<f64>>) -> Self {
        Self { points, table }
    }

    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        self.points.iter().position(|point| *point == coordinate)
    }
}

impl DistanceModel for LookupDistance {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.index_of(from)
            .zip(self.index_of(to))
            .and_then(|(i, j)| self.table.get(i).and_then(|row| row.get(j)))
            .copied()
            .unwrap_or_else(|| {
                log::warn!("no table entry from {from:?} to {to:?}; treating as unreachable");
                f64::INFINITY
            })
    }
}

/// Build a request from `(lat, lng)` endpoints.
///
/// # Examples
/// ```rust
/// use detour_solver::test_support::request;
///
/// let request = request((0.0, 0.0), (0.0, 1.0), 0.5, Vec::new());
/// assert_eq!(request.kappa, 0.5);
/// ```
#[must_use]
pub const fn request(start: (f64, f64), end: (f64, f64), kappa: f64, stops: Vec<Stop>) -> SolveRequest {
    SolveRequest {
        start: Coordinate::new(start.0, start.1),
        end: Coordinate::new(end.0, end.1),
        kappa,
        stops,
    }
}

/// Positions of `stop`'s two occurrences within `path`, skipping the fixed
/// endpoints. Returns `None` unless the stop appears as pickup then drop-off.
#[must_use]
pub fn occurrence_positions(path: &[Coordinate], stop: &Stop) -> Option<(usize, usize)> {
    let inner_end = path.len().saturating_sub(1);
    let waypoints = path.get(1..inner_end)?;
    let pickup = waypoints.iter().position(|point| *point == stop.start)?;
    let after = pickup.saturating_add(1);
    let drop_off = waypoints
        .get(after..)?
        .iter()
        .position(|point| *point == stop.end)?
        .saturating_add(after);
    Some((pickup, drop_off))
}

#[cfg(test)]
mod tests {
    use super::*;
    use detour_core::test_support::stop;
    use rstest::rstest;

    #[rstest]
    fn unregistered_points_are_unreachable() {
        let model = LookupDistance::new(vec![Coordinate::new(0.0, 0.0)], vec![vec![0.0]]);
        let d = model.distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0));
        assert!(d.is_infinite());
    }

    #[rstest]
    fn occurrence_positions_find_pickup_before_drop_off() {
        let served = stop(0, (1.0, 1.0), (2.0, 2.0), 0.0);
        let path = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(5.0, 5.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(9.0, 9.0),
        ];
        assert_eq!(occurrence_positions(&path, &served), Some((0, 2)));
    }

    #[rstest]
    fn occurrence_positions_ignore_the_endpoints() {
        let endpoint_stop = stop(0, (0.0, 0.0), (9.0, 9.0), 0.0);
        let path = vec![Coordinate::new(0.0, 0.0), Coordinate::new(9.0, 9.0)];
        assert_eq!(occurrence_positions(&path, &endpoint_stop), None);
    }
}
