//! Scoring of candidate stop sequences.
//!
//! A candidate is scored by how many occurrences it serves and how long the
//! resulting route is. Routes that exceed the detour budget are reported as
//! serving nothing, while their age and distance are still returned.

use detour_core::{Coordinate, DetourBudget, DistanceModel, StopSequence};

/// Score of a candidate sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Occurrences served: the sequence length when feasible, else zero.
    pub served: usize,
    /// Sum of ages over the distinct stops referenced.
    pub total_age: f64,
    /// Length of `start -> waypoints -> end`.
    pub total_distance: f64,
}

impl Evaluation {
    /// Score of the empty sequence. The infinite distance loses every tie.
    pub const EMPTY: Self = Self {
        served: 0,
        total_age: 0.0,
        total_distance: f64::INFINITY,
    };

    /// Whether this score beats an incumbent of `incumbent_len` occurrences
    /// and `incumbent_distance`.
    ///
    /// More occurrences win outright; equal occurrences need a strictly
    /// shorter route. Age is not consulted. A score serving nothing never
    /// improves, so rounding noise cannot displace the empty route with an
    /// over-budget one.
    #[must_use]
    pub fn improves_on(&self, incumbent_len: usize, incumbent_distance: f64) -> bool {
        self.served > 0
            && (self.served > incumbent_len
                || (self.served == incumbent_len && self.total_distance < incumbent_distance))
    }
}

/// Evaluates sequences between fixed endpoints under a detour budget.
///
/// # Examples
/// ```
/// use detour_core::{Coordinate, DetourBudget, Haversine, Stop, StopSequence};
/// use detour_solver::CostEvaluator;
///
/// let start = Coordinate::new(0.0, 0.0);
/// let end = Coordinate::new(0.0, 1.0);
/// let budget = DetourBudget::from_kappa(&Haversine, start, end, 0.5);
/// let evaluator = CostEvaluator::new(&Haversine, start, end, budget);
///
/// let stops = vec![Stop::new(0, Coordinate::new(0.0, 0.2), Coordinate::new(0.0, 0.4), 0.0)];
/// let sequence = StopSequence::pair(&stops, 0)?;
/// let evaluation = evaluator.evaluate(&sequence);
/// assert_eq!(evaluation.served, 2);
/// # Ok::<(), detour_core::SequenceError>(())
/// ```
#[derive(Debug)]
pub struct CostEvaluator<'m, D: ?Sized> {
    model: &'m D,
    start: Coordinate,
    end: Coordinate,
    budget: DetourBudget,
}

impl<'m, D> CostEvaluator<'m, D>
where
    D: DistanceModel + ?Sized,
{
    /// Construct an evaluator.
    #[must_use]
    pub const fn new(
        model: &'m D,
        start: Coordinate,
        end: Coordinate,
        budget: DetourBudget,
    ) -> Self {
        Self {
            model,
            start,
            end,
            budget,
        }
    }

    /// The budget candidates are checked against.
    #[must_use]
    pub const fn budget(&self) -> DetourBudget {
        self.budget
    }

    /// Distance of the route that serves no stops.
    #[must_use]
    pub fn direct_distance(&self) -> f64 {
        self.model.distance(self.start, self.end)
    }

    /// Length of `start -> resolved waypoints -> end`.
    ///
    /// Each element is resolved by its own occurrence status, so legs between
    /// two drop-offs or two pickups are measured correctly.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "route length is a sum of floating-point legs"
    )]
    pub fn chain_distance(&self, sequence: &StopSequence<'_>) -> f64 {
        let (total, last) = sequence.coordinates().fold(
            (0.0, self.start),
            |(total, previous), coordinate| {
                (total + self.model.distance(previous, coordinate), coordinate)
            },
        );
        total + self.model.distance(last, self.end)
    }

    /// Score `sequence` under the budget feasibility rule.
    #[must_use]
    pub fn evaluate(&self, sequence: &StopSequence<'_>) -> Evaluation {
        if sequence.is_empty() {
            return Evaluation::EMPTY;
        }
        let total_age = sequence.distinct_stops().map(|stop| stop.age).sum();
        let total_distance = self.chain_distance(sequence);
        let served = if self.budget.admits(total_distance) {
            sequence.len()
        } else {
            0
        };
        Evaluation {
            served,
            total_age,
            total_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detour_core::Stop;
    use detour_core::test_support::{PlanarDistance, stop};
    use rstest::{fixture, rstest};

    const START: Coordinate = Coordinate::new(0.0, 0.0);
    const END: Coordinate = Coordinate::new(0.0, 10.0);

    #[fixture]
    fn stops() -> Vec<Stop> {
        vec![
            stop(0, (0.0, 2.0), (0.0, 4.0), 5.0),
            stop(1, (3.0, 6.0), (3.0, 8.0), 7.0),
        ]
    }

    fn evaluator(max_distance: f64) -> CostEvaluator<'static, PlanarDistance> {
        CostEvaluator::new(
            &PlanarDistance,
            START,
            END,
            DetourBudget::with_max_distance(max_distance),
        )
    }

    #[rstest]
    fn empty_sequence_is_never_preferable() {
        let stops: Vec<Stop> = Vec::new();
        let evaluation = evaluator(100.0).evaluate(&StopSequence::empty(&stops));
        assert_eq!(evaluation, Evaluation::EMPTY);
        assert!(evaluation.total_distance.is_infinite());
    }

    #[rstest]
    fn collinear_pair_costs_the_direct_distance(stops: Vec<Stop>) {
        let sequence = StopSequence::pair(&stops, 0).expect("valid");
        let evaluation = evaluator(10.0).evaluate(&sequence);
        assert_eq!(evaluation.served, 2);
        assert_eq!(evaluation.total_age, 5.0);
        assert_eq!(evaluation.total_distance, 10.0);
    }

    #[rstest]
    fn interior_legs_use_each_element_resolution(stops: Vec<Stop>) {
        // 0 -> (0,2) -> (3,6) -> (0,4) -> (3,8) -> (0,10)
        let sequence = StopSequence::from_visits(&stops, vec![0, 1, 0, 1]).expect("valid");
        let expected = 2.0 + 5.0 + 13.0_f64.sqrt() + 5.0 + 13.0_f64.sqrt();
        let distance = evaluator(100.0).chain_distance(&sequence);
        assert!((distance - expected).abs() < 1e-12, "{distance} != {expected}");
    }

    #[rstest]
    fn over_budget_routes_serve_nothing_but_report_costs(stops: Vec<Stop>) {
        let sequence = StopSequence::pair(&stops, 1).expect("valid");
        let evaluation = evaluator(10.0).evaluate(&sequence);
        assert_eq!(evaluation.served, 0);
        assert_eq!(evaluation.total_age, 7.0);
        assert!(evaluation.total_distance > 10.0);
    }

    #[rstest]
    fn age_counts_each_stop_once(stops: Vec<Stop>) {
        let sequence = StopSequence::from_visits(&stops, vec![0, 1, 1, 0]).expect("valid");
        let evaluation = evaluator(100.0).evaluate(&sequence);
        assert_eq!(evaluation.total_age, 12.0);
        assert_eq!(evaluation.served, 4);
    }

    #[rstest]
    #[case(Evaluation { served: 4, total_age: 0.0, total_distance: 50.0 }, 2, 10.0, true)]
    #[case(Evaluation { served: 2, total_age: 0.0, total_distance: 9.0 }, 2, 10.0, true)]
    #[case(Evaluation { served: 2, total_age: 0.0, total_distance: 10.0 }, 2, 10.0, false)]
    #[case(Evaluation { served: 0, total_age: 99.0, total_distance: 1.0 }, 2, 10.0, false)]
    #[case(Evaluation { served: 0, total_age: 0.0, total_distance: 9.999 }, 0, 10.0, false)]
    fn improvement_is_cardinality_then_distance(
        #[case] candidate: Evaluation,
        #[case] incumbent_len: usize,
        #[case] incumbent_distance: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(candidate.improves_on(incumbent_len, incumbent_distance), expected);
    }
}
