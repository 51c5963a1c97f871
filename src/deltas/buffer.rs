use crate::deltas::DeltaLayout;
use crate::util::*;

/// Flat delta values of one layer, addressed through a [`DeltaLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaBuffer<F: NumTrait> {
    layout: DeltaLayout,
    values: Vec<F>,
}

impl<F: NumTrait> DeltaBuffer<F> {
    pub fn new(layout: DeltaLayout, values: Vec<F>) -> Self {
        assert_eq!(
            values.len(),
            layout.buffer_size(),
            "delta buffer does not match layout"
        );
        DeltaBuffer { layout, values }
    }

    pub fn from_slice(layout: DeltaLayout, values: &[F]) -> Self {
        Self::new(layout, values.to_vec())
    }

    pub fn layout(&self) -> &DeltaLayout {
        &self.layout
    }

    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// The consecutive values stored for one grid cell.
    pub fn run(&self, cell: &Coord<2>) -> &[F] {
        let start = self.layout.run_offset(cell);
        &self.values[start..start + self.layout.run_len()]
    }
}
