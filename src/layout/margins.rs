use crate::geometry::Thickness;
use crate::layout::placement::Placement;

/// Compute the gutter margin for one cell.
///
/// Sides touching the grid's outer boundary stay at zero so the grid edge
/// has no gutter; interior sides carry half the spacing, and the facing
/// halves of two adjacent cells sum to the full nominal gap. The far-edge
/// test uses `>=` so a placement past the last track degrades to boundary
/// treatment instead of producing a stray margin.
pub fn cell_margin(
    placement: Placement,
    row_count: u16,
    column_count: u16,
    row_spacing: f64,
    column_spacing: f64,
) -> Thickness {
    let half_row = row_spacing / 2.0;
    let half_column = column_spacing / 2.0;

    let left = if placement.column == 0 { 0.0 } else { half_column };
    let top = if placement.row == 0 { 0.0 } else { half_row };

    let right = if placement.column.saturating_add(placement.column_span) >= column_count {
        0.0
    } else {
        half_column
    };
    let bottom = if placement.row.saturating_add(placement.row_span) >= row_count {
        0.0
    } else {
        half_row
    };

    Thickness::new(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_grid_has_no_gutters() {
        let m = cell_margin(Placement::cell(0, 0), 1, 1, 3.0, 3.0);
        assert_eq!(m, Thickness::ZERO);
    }

    #[test]
    fn top_left_cell_of_two_by_two() {
        let m = cell_margin(Placement::cell(0, 0), 2, 2, 10.0, 10.0);
        assert_eq!(m, Thickness::new(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn bottom_right_cell_of_two_by_two() {
        let m = cell_margin(Placement::cell(1, 1), 2, 2, 10.0, 10.0);
        assert_eq!(m, Thickness::new(5.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn full_width_span_touches_both_column_edges() {
        let m = cell_margin(Placement::spanning(0, 0, 1, 3), 1, 3, 0.0, 12.0);
        assert_eq!(m.left, 0.0);
        assert_eq!(m.right, 0.0);
    }

    #[test]
    fn interior_cell_carries_half_spacing_on_every_side() {
        let m = cell_margin(Placement::cell(1, 1), 3, 3, 6.0, 8.0);
        assert_eq!(m, Thickness::new(4.0, 3.0, 4.0, 3.0));
    }

    #[test]
    fn boundary_sides_stay_zero_for_any_magnitude() {
        for spacing in [0.0, 1.0, 3.0, 250.0] {
            let m = cell_margin(Placement::cell(0, 0), 4, 4, spacing, spacing);
            assert_eq!(m.left, 0.0);
            assert_eq!(m.top, 0.0);
            assert_eq!(m.right, spacing / 2.0);
            assert_eq!(m.bottom, spacing / 2.0);
        }
    }

    #[test]
    fn out_of_range_placement_degrades_to_boundary_treatment() {
        // Column 9 in a 2-column grid: the host primitive decides how to
        // render it; the gutter math must not blow up or add a far-side gap.
        let m = cell_margin(Placement::cell(0, 9), 2, 2, 10.0, 10.0);
        assert_eq!(m, Thickness::new(5.0, 0.0, 0.0, 5.0));
    }

    #[test]
    fn zero_track_grid_yields_zero_margins() {
        let m = cell_margin(Placement::cell(0, 0), 0, 0, 10.0, 10.0);
        assert_eq!(m, Thickness::ZERO);
    }

    #[test]
    fn span_overflow_saturates() {
        let m = cell_margin(
            Placement::spanning(0, u16::MAX, 1, u16::MAX),
            2,
            2,
            10.0,
            10.0,
        );
        assert_eq!(m.right, 0.0);
    }
}
