//! Greedy multi-round insertion search.
//!
//! Each round tries to add one stop (both occurrences) to the incumbent
//! sequence. Round 0 only considers `[stop, stop]`. Later rounds try every
//! pair of insertion positions that keeps the pickup ahead of the drop-off.
//! Candidates are always grown from the sequence adopted at the end of the
//! previous round, so a round adds at most one stop.

use detour_core::{DistanceModel, Stop, StopSequence};

use crate::evaluate::CostEvaluator;

/// Default number of search rounds, and so the default cap on served stops.
pub const MAX_ROUNDS: usize = 5;

/// Outcome of [`InsertionSearch::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    /// The adopted sequence. Empty when no stop fits the budget.
    pub sequence: StopSequence<'a>,
    /// Route length of `sequence`, or the direct distance when it is empty.
    pub distance: f64,
    /// Rounds executed, including a final round that adopted nothing.
    pub rounds: usize,
    /// Candidate sequences scored across all rounds.
    pub candidates_evaluated: u64,
}

#[derive(Debug, Clone)]
struct Incumbent<'a> {
    sequence: StopSequence<'a>,
    distance: f64,
    adopted: Option<usize>,
}

/// Greedy insertion over a [`CostEvaluator`].
#[derive(Debug)]
pub struct InsertionSearch<'e, 'm, D: ?Sized> {
    evaluator: &'e CostEvaluator<'m, D>,
    max_rounds: usize,
}

impl<'e, 'm, D> InsertionSearch<'e, 'm, D>
where
    D: DistanceModel + ?Sized,
{
    /// Construct a search bounded by `max_rounds`.
    #[must_use]
    pub const fn new(evaluator: &'e CostEvaluator<'m, D>, max_rounds: usize) -> Self {
        Self {
            evaluator,
            max_rounds,
        }
    }

    /// Search for the sequence serving the most stops within budget.
    ///
    /// Ties on occurrence count go to the strictly shorter route, compared as
    /// computed `f64` lengths. Only bit-identical lengths fall back to the
    /// candidate found first, scanning stops in input order and insertion
    /// positions in ascending order, so routes that tie geometrically may be
    /// separated by rounding. The result is deterministic.
    #[must_use]
    pub fn run<'a>(&self, stops: &'a [Stop]) -> SearchResult<'a> {
        let mut best = Incumbent {
            sequence: StopSequence::empty(stops),
            distance: self.evaluator.direct_distance(),
            adopted: None,
        };
        let mut candidates_evaluated = 0_u64;
        let mut rounds = 0_usize;

        for round in 0..self.max_rounds {
            rounds = round.saturating_add(1);
            let mut round_best = Incumbent {
                adopted: None,
                ..best.clone()
            };
            for stop_index in 0..stops.len() {
                if best.sequence.contains(stop_index) {
                    continue;
                }
                for candidate in candidates(&best.sequence, stop_index, round) {
                    candidates_evaluated = candidates_evaluated.saturating_add(1);
                    let evaluation = self.evaluator.evaluate(&candidate);
                    if evaluation.improves_on(round_best.sequence.len(), round_best.distance) {
                        log::trace!(
                            "round {round}: stop {stop_index} improves to {} occurrences over {:.6}",
                            evaluation.served,
                            evaluation.total_distance
                        );
                        round_best = Incumbent {
                            sequence: candidate,
                            distance: evaluation.total_distance,
                            adopted: Some(stop_index),
                        };
                    }
                }
            }

            let Some(adopted) = round_best.adopted else {
                log::debug!("round {round}: no improving insertion, stopping");
                break;
            };
            log::debug!(
                "round {round}: adopted stop {adopted}, {} occurrences over {:.6}",
                round_best.sequence.len(),
                round_best.distance
            );
            best = round_best;
        }

        SearchResult {
            sequence: best.sequence,
            distance: best.distance,
            rounds,
            candidates_evaluated,
        }
    }
}

/// Candidate sequences that add `stop_index` to `base`.
fn candidates<'a>(
    base: &StopSequence<'a>,
    stop_index: usize,
    round: usize,
) -> Vec<StopSequence<'a>> {
    let built = if round == 0 {
        vec![StopSequence::pair(base.stops(), stop_index)]
    } else {
        let len = base.len();
        (0..=len)
            .flat_map(|pickup_at| {
                (pickup_at..=len.saturating_add(1)).map(move |drop_off_at| (pickup_at, drop_off_at))
            })
            .map(|(pickup_at, drop_off_at)| base.with_inserted(stop_index, pickup_at, drop_off_at))
            .collect()
    };
    built
        .into_iter()
        .filter_map(|candidate| {
            candidate
                .map_err(|err| {
                    log::warn!("skipping candidate for stop {stop_index}: {err}");
                    debug_assert!(false, "candidate construction failed: {err}");
                })
                .ok()
        })
        .collect()
}
