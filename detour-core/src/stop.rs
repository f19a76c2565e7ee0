//! Optional stops: a pickup and a drop-off that must be visited in order.

use crate::Coordinate;

/// Which of a stop's two visits a waypoint represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Leg {
    /// First visit; resolves to [`Stop::start`].
    Pickup,
    /// Any later visit; resolves to [`Stop::end`].
    DropOff,
}

/// A demand with a pickup coordinate, a drop-off coordinate and an age.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, Leg, Stop};
///
/// let stop = Stop::new(0, Coordinate::new(0.0, 0.2), Coordinate::new(0.0, 0.8), 3.0);
/// assert_eq!(stop.coordinate(Leg::Pickup), Coordinate::new(0.0, 0.2));
/// assert_eq!(stop.coordinate(Leg::DropOff), Coordinate::new(0.0, 0.8));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Identifier assigned from input order. Not used for ranking.
    pub id: usize,
    /// Pickup location.
    pub start: Coordinate,
    /// Drop-off location.
    pub end: Coordinate,
    /// Priority age; higher values are older.
    pub age: f64,
}

impl Stop {
    /// Construct a stop.
    #[must_use]
    pub const fn new(id: usize, start: Coordinate, end: Coordinate, age: f64) -> Self {
        Self {
            id,
            start,
            end,
            age,
        }
    }

    /// Coordinate visited for the given leg.
    #[must_use]
    pub const fn coordinate(&self, leg: Leg) -> Coordinate {
        match leg {
            Leg::Pickup => self.start,
            Leg::DropOff => self.end,
        }
    }
}
