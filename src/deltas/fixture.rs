//! Hardcoded layer delta test case: a 3x3 grid with three filters
//! backpropagated through a 3x3 filter onto a 5x5 layer.
//!
//! ```text
//! 00000    -
//! 0___0    0
//! 0___0    1
//! 0___0    2
//! 00000    -
//! ```

use crate::deltas::*;
use crate::util::*;
use num_traits::AsPrimitive;

pub const FILTER_SIZE: i32 = 3;

/// Values per cell in the current layer (n_curr).
pub const FILTER_COUNT: i32 = 3;

pub const GRID_ROWS: i32 = 3;
pub const GRID_COLS: i32 = 3;

#[rustfmt::skip]
pub const DELTAS: [f64; 27] = [
    0.122, 0.083, 0.064,
    0.057, 0.075, 0.055,
    0.025, 0.058, 0.138,
    0.170, 0.068, 0.144,
    0.121, 0.013, 0.176,
    0.065, 0.169, 0.049,
    0.003, 0.181, 0.051,
    0.021, 0.136, 0.062,
    0.066, 0.165, 0.176,
];

/// Contributing (row, col) cells for each previous layer position.
/// Cell order within a group is significant for the exact sums.
#[rustfmt::skip]
pub const GROUPINGS: [&[[i32; 2]]; 25] = [
    &[[0, 0]],
    &[[0, 0], [0, 1]],
    &[[0, 0], [0, 1], [0, 2]],
    &[[0, 1], [0, 2]],
    &[[0, 2]],

    &[[0, 0], [1, 0]],
    &[[0, 0], [0, 1], [1, 0], [1, 1]],
    &[[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]],
    &[[0, 1], [0, 2], [1, 1], [1, 2]],
    &[[0, 2], [1, 2]],

    &[[0, 0], [1, 0], [2, 0]],
    &[[0, 0], [0, 1], [1, 0], [1, 1], [2, 0], [2, 1]],
    &[[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2], [2, 0], [2, 1], [2, 2]],
    &[[0, 1], [0, 2], [1, 1], [1, 2], [2, 1], [2, 2]],
    &[[0, 2], [1, 2], [2, 2]],

    &[[2, 0], [1, 0]],
    &[[2, 0], [2, 1], [1, 0], [1, 1]],
    &[[2, 0], [2, 1], [2, 2], [1, 0], [1, 1], [1, 2]],
    &[[2, 1], [2, 2], [1, 1], [1, 2]],
    &[[2, 2], [1, 2]],

    &[[2, 0]],
    &[[2, 0], [2, 1]],
    &[[2, 0], [2, 1], [2, 2]],
    &[[2, 1], [2, 2]],
    &[[2, 2]],
];

pub fn layout() -> DeltaLayout {
    DeltaLayout::new(GRID_ROWS, GRID_COLS, FILTER_SIZE, FILTER_COUNT)
}

pub fn buffer() -> DeltaBuffer<f64> {
    DeltaBuffer::from_slice(layout(), &DELTAS)
}

/// The fixture deltas converted to another scalar type, e.g. `f32`
/// for single precision test kernels.
pub fn buffer_as<F>() -> DeltaBuffer<F>
where
    F: NumTrait + 'static,
    f64: AsPrimitive<F>,
{
    DeltaBuffer::new(layout(), DELTAS.iter().map(|&v| v.as_()).collect())
}

pub fn groupings() -> Vec<Grouping> {
    GROUPINGS
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|cell| Coord::from_column_slice(cell))
                .collect()
        })
        .collect()
}
