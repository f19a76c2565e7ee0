//! Conversion of stop sequences into coordinate paths.

use detour_core::{Coordinate, StopSequence};

/// Resolve each element of `sequence` to its pickup or drop-off coordinate.
///
/// The first occurrence of a stop resolves to its pickup, any later
/// occurrence to its drop-off. The output has one coordinate per element.
#[must_use]
pub fn reconstruct(sequence: &StopSequence<'_>) -> Vec<Coordinate> {
    sequence.coordinates().collect()
}

/// `[start] + reconstruct(sequence) + [end]`.
#[must_use]
pub fn full_path(start: Coordinate, end: Coordinate, sequence: &StopSequence<'_>) -> Vec<Coordinate> {
    let mut path = Vec::with_capacity(sequence.len().saturating_add(2));
    path.push(start);
    path.extend(sequence.coordinates());
    path.push(end);
    path
}
