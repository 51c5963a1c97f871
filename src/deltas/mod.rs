//! Backpropagation of convolution deltas onto the previous layer.
//!
//! The current layer holds one run of `filter_count` deltas per grid cell.
//! Every previous layer position receives the sum of the runs of all cells
//! whose filter window covers it.

mod aggregate;
mod buffer;
pub mod fixture;
mod grouping;
mod layout;

pub use aggregate::*;
pub use buffer::*;
pub use grouping::*;
pub use layout::*;
