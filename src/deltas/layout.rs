use crate::util::*;
use nalgebra::vector;

/// Shape of a layer's delta buffer.
/// A grid of cells, each holding a run of `filter_count` values,
/// stored row major over (row, col, filter).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DeltaLayout {
    pub grid: AABB<2>,
    pub filter_size: i32,
    pub filter_count: i32,
}

impl DeltaLayout {
    pub fn new(rows: i32, cols: i32, filter_size: i32, filter_count: i32) -> Self {
        assert!(rows > 0 && cols > 0, "empty delta grid");
        assert!(filter_size > 0, "filter size must be positive");
        assert!(filter_count > 0, "filter count must be positive");
        DeltaLayout {
            grid: AABB::from_extent(vector![rows, cols]),
            filter_size,
            filter_count,
        }
    }

    fn buffer_bounds(&self) -> AABB<3> {
        let grid_extent = self.grid.exclusive_bounds();
        AABB::from_extent(vector![
            grid_extent[0],
            grid_extent[1],
            self.filter_count
        ])
    }

    /// Total number of values in a delta buffer with this layout.
    pub fn buffer_size(&self) -> usize {
        self.buffer_bounds().buffer_size()
    }

    #[inline]
    pub fn run_len(&self) -> usize {
        self.filter_count as usize
    }

    /// Index of the first value of a cell's run.
    pub fn run_offset(&self, cell: &Coord<2>) -> usize {
        assert!(
            self.grid.contains(cell),
            "cell {cell:?} outside delta grid {}",
            self.grid
        );
        self.buffer_bounds()
            .coord_to_linear(&vector![cell[0], cell[1], 0])
    }

    /// Positions of the previous layer, a full correlation
    /// of the grid with the filter.
    pub fn output_bounds(&self) -> AABB<2> {
        self.grid.grow_max(self.filter_size - 1)
    }
}
