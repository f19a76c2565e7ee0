//! Detour budgets: how far a route may stretch beyond the direct distance.

use crate::{Coordinate, DistanceModel};

/// Relative slack applied when comparing a route against its budget.
///
/// Summing legs of a route that lies on the direct great circle can exceed
/// the direct distance by a few ulps; such routes are admitted.
pub const BUDGET_TOLERANCE: f64 = 1e-9;

/// Upper bound on the total length of a served route.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, DetourBudget, Haversine};
///
/// let start = Coordinate::new(0.0, 0.0);
/// let end = Coordinate::new(0.0, 1.0);
/// let budget = DetourBudget::from_kappa(&Haversine, start, end, 0.5);
/// assert!(budget.admits(150.0));
/// assert!(!budget.admits(200.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetourBudget {
    max_distance: f64,
}

impl DetourBudget {
    /// Budget of `(1 + kappa)` times the direct `start` to `end` distance.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the detour factor scales a floating-point distance"
    )]
    pub fn from_kappa<D>(model: &D, start: Coordinate, end: Coordinate, kappa: f64) -> Self
    where
        D: DistanceModel + ?Sized,
    {
        Self::with_max_distance((1.0 + kappa) * model.distance(start, end))
    }

    /// Budget with an explicit maximum distance.
    #[must_use]
    pub const fn with_max_distance(max_distance: f64) -> Self {
        Self { max_distance }
    }

    /// The maximum admitted route distance.
    #[must_use]
    pub const fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Whether a route of `distance` fits within the budget.
    ///
    /// `NaN` and infinite distances are never admitted by a finite budget.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "tolerance is a relative floating-point margin"
    )]
    pub fn admits(&self, distance: f64) -> bool {
        distance <= self.max_distance + BUDGET_TOLERANCE * self.max_distance.abs()
    }
}
