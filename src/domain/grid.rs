//! Grid - Column Spans and Responsive Column Counts

/// Columns of a [`Grid`](crate::components::layout::grid::Grid) row
pub const GRID_COLUMNS: u16 = 12;

/// Share of the row covered by `span` out of `columns`.
///
/// A missing or zero span covers the full row; spans wider than the row
/// are clamped to it.
pub fn span_fraction(span: Option<u16>, columns: u16) -> f32 {
    let columns = columns.max(1);
    match span {
        Some(span) if span > 0 => f32::from(span.min(columns)) / f32::from(columns),
        _ => 1.0,
    }
}

/// Left margin of a column shifted by `offset` columns
pub fn offset_fraction(offset: u16, columns: u16) -> f32 {
    let columns = columns.max(1);
    f32::from(offset.min(columns)) / f32::from(columns)
}

/// Column count that applies up to a viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub max_width: f32,
    pub cols: usize,
}

impl Breakpoint {
    pub fn new(max_width: f32, cols: usize) -> Self {
        Self { max_width, cols }
    }
}

/// Column count of a simple grid at `width`.
///
/// The narrowest breakpoint that still covers `width` wins; past every
/// breakpoint the grid keeps `cols`. Never returns zero.
pub fn columns_for_width(width: f32, cols: usize, breakpoints: &[Breakpoint]) -> usize {
    breakpoints
        .iter()
        .filter(|bp| width <= bp.max_width)
        .min_by(|a, b| a.max_width.total_cmp(&b.max_width))
        .map_or(cols, |bp| bp.cols)
        .max(1)
}

/// Split `len` items into rows of `cols`, returning the index range of each row
pub fn rows(len: usize, cols: usize) -> impl Iterator<Item = std::ops::Range<usize>> {
    let cols = cols.max(1);
    (0..len)
        .step_by(cols)
        .map(move |start| start..(start + cols).min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_divide_the_row() {
        assert_eq!(span_fraction(Some(6), GRID_COLUMNS), 0.5);
        assert_eq!(span_fraction(Some(3), GRID_COLUMNS), 0.25);
        assert_eq!(span_fraction(None, GRID_COLUMNS), 1.0);
        assert_eq!(span_fraction(Some(0), GRID_COLUMNS), 1.0);
        assert_eq!(span_fraction(Some(40), GRID_COLUMNS), 1.0);
    }

    #[test]
    fn offsets_are_clamped() {
        assert_eq!(offset_fraction(0, GRID_COLUMNS), 0.0);
        assert_eq!(offset_fraction(3, GRID_COLUMNS), 0.25);
        assert_eq!(offset_fraction(20, 4), 1.0);
        assert_eq!(offset_fraction(1, 0), 1.0);
    }

    #[test]
    fn narrowest_matching_breakpoint_wins() {
        let breakpoints = [Breakpoint::new(980.0, 3), Breakpoint::new(600.0, 1)];
        assert_eq!(columns_for_width(1200.0, 4, &breakpoints), 4);
        assert_eq!(columns_for_width(800.0, 4, &breakpoints), 3);
        assert_eq!(columns_for_width(600.0, 4, &breakpoints), 1);
        assert_eq!(columns_for_width(320.0, 4, &breakpoints), 1);
    }

    #[test]
    fn zero_columns_become_one() {
        assert_eq!(columns_for_width(100.0, 0, &[]), 1);
        assert_eq!(columns_for_width(100.0, 3, &[Breakpoint::new(200.0, 0)]), 1);
    }

    #[test]
    fn rows_cover_every_item_once() {
        let split: Vec<_> = rows(7, 3).collect();
        assert_eq!(split, vec![0..3, 3..6, 6..7]);
        assert_eq!(rows(0, 3).count(), 0);
        assert_eq!(rows(2, 0).collect::<Vec<_>>(), vec![0..1, 1..2]);
    }
}
