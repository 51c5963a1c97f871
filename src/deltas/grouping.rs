use crate::deltas::DeltaLayout;
use crate::util::*;

/// Grid cells whose runs add up to one previous layer value.
pub type Grouping = Vec<Coord<2>>;

/// Cells of the delta grid whose filter window covers `output`,
/// in row major order.
pub fn contributing_cells(layout: &DeltaLayout, output: &Coord<2>) -> Grouping {
    assert!(
        layout.output_bounds().contains(output),
        "output {output:?} outside {}",
        layout.output_bounds()
    );
    let mut window =
        AABB::from_mm(output.add_scalar(1 - layout.filter_size), *output);
    window.trim_to_aabb(&layout.grid);
    debug_assert!(window.check_validity());
    window.coord_iter().collect()
}

/// One grouping per previous layer position, row major.
pub fn generate_groupings(layout: &DeltaLayout) -> Vec<Grouping> {
    profiling::scope!("generate_groupings");
    layout
        .output_bounds()
        .coord_iter()
        .map(|output| contributing_cells(layout, &output))
        .collect()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn corners_and_center() {
        let layout = DeltaLayout::new(3, 3, 3, 3);
        assert_eq!(
            contributing_cells(&layout, &vector![0, 0]),
            vec![vector![0, 0]]
        );
        assert_eq!(
            contributing_cells(&layout, &vector![4, 4]),
            vec![vector![2, 2]]
        );
        assert_eq!(
            contributing_cells(&layout, &vector![3, 0]),
            vec![vector![1, 0], vector![2, 0]]
        );
        let center = contributing_cells(&layout, &vector![2, 2]);
        assert_eq!(center, layout.grid.coord_iter().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic]
    fn outside_output_bounds() {
        let layout = DeltaLayout::new(3, 3, 3, 3);
        contributing_cells(&layout, &vector![10, 10]);
    }

    #[test]
    #[should_panic]
    fn negative_output() {
        let layout = DeltaLayout::new(3, 3, 3, 3);
        contributing_cells(&layout, &vector![-1, 2]);
    }

    #[test]
    fn cardinalities() {
        let layout = DeltaLayout::new(3, 3, 3, 3);
        let groupings = generate_groupings(&layout);
        assert_eq!(groupings.len(), 25);

        let per_axis = [1, 2, 3, 2, 1];
        for (i, grouping) in groupings.iter().enumerate() {
            assert_eq!(grouping.len(), per_axis[i / 5] * per_axis[i % 5]);
        }
    }

    #[test]
    fn larger_grid_interior() {
        // 5x5 grid, 3x3 filter: previous layer is 7x7,
        // positions 2..=4 on both axes see a full window.
        let layout = DeltaLayout::new(5, 5, 3, 1);
        let groupings = generate_groupings(&layout);
        assert_eq!(groupings.len(), 49);
        let interior = &groupings[3 * 7 + 3];
        assert_eq!(interior.len(), 9);
        assert_eq!(interior[0], vector![1, 1]);
        assert_eq!(interior[8], vector![3, 3]);
    }

    #[test]
    fn every_cell_feeds_a_full_window() {
        // Each cell's filter covers f * f previous layer positions.
        let layout = DeltaLayout::new(3, 4, 2, 1);
        let groupings = generate_groupings(&layout);
        for cell in layout.grid.coord_iter() {
            let hits = groupings.iter().filter(|g| g.contains(&cell)).count();
            assert_eq!(hits, 4);
        }
    }
}
