//! Dense row-major grid placement.
//!
//! Boxes fill a square-ish grid left to right, top to bottom, in input
//! order. Columns have a fixed pitch; each row is as tall as its tallest box
//! so every box in a row shares the same top edge.

use log::trace;

use erdraw_core::geometry::{Point, Size};

/// Number of grid columns for `count` boxes: the smallest `c` with `c * c >= count`.
pub fn columns_for(count: usize) -> usize {
    let mut columns = 0;
    while columns * columns < count {
        columns += 1;
    }
    columns
}

/// A cell position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    row: usize,
    column: usize,
}

impl GridCell {
    pub fn row(self) -> usize {
        self.row
    }

    pub fn column(self) -> usize {
        self.column
    }
}

/// The computed grid for one set of boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGrid {
    columns: usize,
    column_pitch: f32,
    row_offsets: Vec<f32>,
    row_heights: Vec<f32>,
}

impl LayoutGrid {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    /// Cell of the `index`-th box.
    pub fn cell(&self, index: usize) -> GridCell {
        GridCell {
            row: index / self.columns,
            column: index % self.columns,
        }
    }

    /// Height of the tallest box in `row`.
    pub fn row_height(&self, row: usize) -> f32 {
        self.row_heights[row]
    }

    /// Top edge of `row`.
    pub fn row_offset(&self, row: usize) -> f32 {
        self.row_offsets[row]
    }

    /// Top-left corner of the `index`-th box.
    pub fn position(&self, index: usize) -> Point {
        let cell = self.cell(index);
        Point::new(
            cell.column as f32 * self.column_pitch,
            self.row_offsets[cell.row],
        )
    }
}

/// Places sized boxes on a [`LayoutGrid`].
#[derive(Debug, Clone, Copy)]
pub struct GridPlacer {
    column_width: f32,
    padding: f32,
}

impl GridPlacer {
    /// Create a placer whose columns are `column_width` wide, with no gap.
    pub fn new(column_width: f32) -> Self {
        Self {
            column_width,
            padding: 0.0,
        }
    }

    /// Set the gap between columns and between rows.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Compute the grid for `sizes`, or `None` when there is nothing to place.
    pub fn grid(&self, sizes: &[Size]) -> Option<LayoutGrid> {
        if sizes.is_empty() {
            return None;
        }

        let columns = columns_for(sizes.len());
        let mut row_offsets = Vec::new();
        let mut row_heights = Vec::new();
        let mut y = 0.0;

        for row in sizes.chunks(columns) {
            let height = row.iter().map(|size| size.height()).fold(0.0, f32::max);
            row_offsets.push(y);
            row_heights.push(height);
            y += height + self.padding;
        }

        trace!(columns, rows = row_heights.len(); "Computed grid");

        Some(LayoutGrid {
            columns,
            column_pitch: self.column_width + self.padding,
            row_offsets,
            row_heights,
        })
    }

    /// Top-left corners for `sizes`, in input order.
    pub fn place(&self, sizes: &[Size]) -> Vec<Point> {
        match self.grid(sizes) {
            Some(grid) => (0..sizes.len()).map(|index| grid.position(index)).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for(0), 0);
        assert_eq!(columns_for(1), 1);
        assert_eq!(columns_for(2), 2);
        assert_eq!(columns_for(4), 2);
        assert_eq!(columns_for(5), 3);
        assert_eq!(columns_for(9), 3);
        assert_eq!(columns_for(10), 4);
    }

    #[test]
    fn test_empty_input_has_no_grid() {
        let placer = GridPlacer::new(240.0).with_padding(150.0);
        assert!(placer.grid(&[]).is_none());
        assert!(placer.place(&[]).is_empty());
    }

    #[test]
    fn test_rows_take_tallest_box() {
        let placer = GridPlacer::new(100.0).with_padding(10.0);
        let sizes = [
            Size::new(100.0, 50.0),
            Size::new(100.0, 80.0),
            Size::new(100.0, 30.0),
        ];

        let grid = placer.grid(&sizes).unwrap();
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
        assert_approx_eq!(f32, grid.row_height(0), 80.0);
        assert_approx_eq!(f32, grid.row_offset(1), 90.0);

        let positions = placer.place(&sizes);
        assert_eq!(positions[0], Point::new(0.0, 0.0));
        assert_eq!(positions[1], Point::new(110.0, 0.0));
        assert_eq!(positions[2], Point::new(0.0, 90.0));
    }
}
