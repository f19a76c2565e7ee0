//! Candidate stop sequences and the pickup/drop-off occurrence rule.
//!
//! A [`StopSequence`] lists positions into a request's stop slice. A served
//! stop appears twice. The first occurrence of a stop, reading left to right,
//! is its pickup; any later occurrence is its drop-off. The rule is applied by
//! [`StopSequence::waypoints`] with a visited marker local to each pass, so no
//! state is ever stored on a [`Stop`].

use thiserror::Error;

use crate::{Coordinate, Leg, Stop};

/// Errors returned when building a [`StopSequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A position does not name one of the request's stops.
    #[error("stop position {position} is out of range for {available} stops")]
    UnknownStop {
        /// Offending position.
        position: usize,
        /// Number of stops in the request.
        available: usize,
    },
    /// An insertion index lies beyond the end of the sequence.
    #[error("insertion index {index} exceeds sequence length {len}")]
    InsertionOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the sequence the index applies to.
        len: usize,
    },
    /// The drop-off would be inserted before the pickup.
    #[error("drop-off index {drop_off_at} precedes pickup index {pickup_at}")]
    DropOffBeforePickup {
        /// Requested pickup index.
        pickup_at: usize,
        /// Requested drop-off index.
        drop_off_at: usize,
    },
}

/// One resolved element of a [`StopSequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint<'a> {
    /// Position of the stop within the request's stop slice.
    pub stop_index: usize,
    /// The stop being visited.
    pub stop: &'a Stop,
    /// Whether this occurrence is the pickup or the drop-off.
    pub leg: Leg,
}

impl Waypoint<'_> {
    /// Coordinate visited at this waypoint.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.stop.coordinate(self.leg)
    }
}

/// An ordered list of stop references drawn from one request.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, Leg, Stop, StopSequence};
///
/// let stops = vec![
///     Stop::new(0, Coordinate::new(0.0, 0.1), Coordinate::new(0.0, 0.2), 0.0),
///     Stop::new(1, Coordinate::new(0.0, 0.3), Coordinate::new(0.0, 0.4), 0.0),
/// ];
/// let sequence = StopSequence::from_visits(&stops, vec![0, 1, 0, 1])?;
/// let legs: Vec<Leg> = sequence.waypoints().map(|w| w.leg).collect();
/// assert_eq!(legs, vec![Leg::Pickup, Leg::Pickup, Leg::DropOff, Leg::DropOff]);
/// # Ok::<(), detour_core::SequenceError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StopSequence<'a> {
    stops: &'a [Stop],
    visits: Vec<usize>,
}

impl<'a> StopSequence<'a> {
    /// An empty sequence over `stops`.
    #[must_use]
    pub const fn empty(stops: &'a [Stop]) -> Self {
        Self {
            stops,
            visits: Vec::new(),
        }
    }

    /// Build a sequence from explicit stop positions.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::UnknownStop`] when a position is out of range.
    pub fn from_visits(stops: &'a [Stop], visits: Vec<usize>) -> Result<Self, SequenceError> {
        if let Some(&position) = visits.iter().find(|&&position| position >= stops.len()) {
            return Err(SequenceError::UnknownStop {
                position,
                available: stops.len(),
            });
        }
        Ok(Self { stops, visits })
    }

    /// The two-element sequence `[stop, stop]`: pickup then drop-off.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::UnknownStop`] when `stop` is out of range.
    pub fn pair(stops: &'a [Stop], stop: usize) -> Result<Self, SequenceError> {
        Self::from_visits(stops, vec![stop, stop])
    }

    /// Copy this sequence with `stop` inserted twice.
    ///
    /// `pickup_at` indexes into this sequence; `drop_off_at` indexes into the
    /// copy after the first insertion, so `pickup_at <= drop_off_at <= len + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error when `stop` is out of range or either index is invalid.
    ///
    /// # Examples
    /// ```
    /// use detour_core::{Coordinate, Stop, StopSequence};
    ///
    /// let origin = Coordinate::new(0.0, 0.0);
    /// let stops = vec![Stop::new(0, origin, origin, 0.0), Stop::new(1, origin, origin, 0.0)];
    /// let base = StopSequence::pair(&stops, 0)?;
    /// let grown = base.with_inserted(1, 1, 3)?;
    /// assert_eq!(grown.visits(), &[0, 1, 0, 1]);
    /// # Ok::<(), detour_core::SequenceError>(())
    /// ```
    pub fn with_inserted(
        &self,
        stop: usize,
        pickup_at: usize,
        drop_off_at: usize,
    ) -> Result<Self, SequenceError> {
        if stop >= self.stops.len() {
            return Err(SequenceError::UnknownStop {
                position: stop,
                available: self.stops.len(),
            });
        }
        let len = self.visits.len();
        if pickup_at > len {
            return Err(SequenceError::InsertionOutOfBounds {
                index: pickup_at,
                len,
            });
        }
        if drop_off_at < pickup_at {
            return Err(SequenceError::DropOffBeforePickup {
                pickup_at,
                drop_off_at,
            });
        }
        let grown_len = len.saturating_add(1);
        if drop_off_at > grown_len {
            return Err(SequenceError::InsertionOutOfBounds {
                index: drop_off_at,
                len: grown_len,
            });
        }
        let mut visits = Vec::with_capacity(len.saturating_add(2));
        visits.extend_from_slice(&self.visits);
        visits.insert(pickup_at, stop);
        visits.insert(drop_off_at, stop);
        Ok(Self {
            stops: self.stops,
            visits,
        })
    }

    /// The stops this sequence draws from.
    #[must_use]
    pub const fn stops(&self) -> &'a [Stop] {
        self.stops
    }

    /// Stop positions in visiting order.
    #[must_use]
    pub fn visits(&self) -> &[usize] {
        &self.visits
    }

    /// Number of occurrences, counting both legs of a served stop.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether the sequence visits nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Whether `stop` is referenced at least once.
    #[must_use]
    pub fn contains(&self, stop: usize) -> bool {
        self.visits.contains(&stop)
    }

    /// Resolve every occurrence to a pickup or drop-off, left to right.
    pub fn waypoints(&self) -> impl Iterator<Item = Waypoint<'a>> + '_ {
        let stops = self.stops;
        let mut visited = vec![false; stops.len()];
        self.visits.iter().filter_map(move |&stop_index| {
            let stop = stops.get(stop_index)?;
            let seen = visited.get_mut(stop_index)?;
            let leg = if *seen { Leg::DropOff } else { Leg::Pickup };
            *seen = true;
            Some(Waypoint {
                stop_index,
                stop,
                leg,
            })
        })
    }

    /// Resolved coordinates, one per occurrence.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.waypoints().map(|waypoint| waypoint.coordinate())
    }

    /// Distinct stops referenced, in order of first occurrence.
    pub fn distinct_stops(&self) -> impl Iterator<Item = &'a Stop> + '_ {
        self.waypoints()
            .filter(|waypoint| waypoint.leg == Leg::Pickup)
            .map(|waypoint| waypoint.stop)
    }

    /// Identifiers of stops whose drop-off is visited, in pickup order.
    #[must_use]
    pub fn served_stop_ids(&self) -> Vec<usize> {
        let mut occurrences = vec![0_usize; self.stops.len()];
        for &stop_index in &self.visits {
            if let Some(count) = occurrences.get_mut(stop_index) {
                *count = count.saturating_add(1);
            }
        }
        self.waypoints()
            .filter(|waypoint| {
                waypoint.leg == Leg::Pickup
                    && occurrences
                        .get(waypoint.stop_index)
                        .is_some_and(|&count| count >= 2)
            })
            .map(|waypoint| waypoint.stop.id)
            .collect()
    }
}
