pub use num_traits::{Num, One, Zero};

/// Scalar types we can aggregate deltas over.
pub trait NumTrait: Num + Copy {}

impl<T: Num + Copy> NumTrait for T {}

mod aabb;
pub mod indexing;
pub use aabb::*;

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive min / max per dimension, column 0 is min, column 1 is max.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;
