use crate::deltas::{DeltaBuffer, Grouping};
use crate::util::*;

/// Sum the runs of every cell in `grouping`.
/// Cells are visited in grouping order and each run front to back,
/// so the result is reproducible bit for bit.
pub fn aggregate<F: NumTrait>(buffer: &DeltaBuffer<F>, grouping: &[Coord<2>]) -> F {
    grouping.iter().fold(F::zero(), |accumulator, cell| {
        buffer
            .run(cell)
            .iter()
            .fold(accumulator, |accumulator, value| accumulator + *value)
    })
}

/// Aggregate each grouping in order.
pub fn aggregate_all<F: NumTrait>(
    buffer: &DeltaBuffer<F>,
    groupings: &[Grouping],
) -> Vec<F> {
    profiling::scope!("aggregate_all");
    groupings
        .iter()
        .map(|grouping| aggregate(buffer, grouping))
        .collect()
}
