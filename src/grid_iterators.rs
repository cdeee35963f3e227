use std::fmt;

use crate::cells::GridCoordinate;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Row-major walk over every cell coordinate of a rectangular grid.
#[derive(Clone)]
pub struct RectGridCellIter {
    columns: ColumnsCount,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> RectGridCellIter {
        RectGridCellIter {
            columns,
            current_cell_number: 0,
            cells_count: rows.0 * columns.0,
        }
    }
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number, self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// Walks the grid one whole row at a time, north to south.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    current_row: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RectRowIter {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> RectRowIter {
        RectRowIter {
            current_row: 0,
            rows,
            columns,
        }
    }
}

impl ExactSizeIterator for RectRowIter {}
impl Iterator for RectRowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows;
        if self.current_row < count {
            let ColumnsCount(length) = self.columns;
            let row = RowIndex(self.current_row);
            let coords = (0..length)
                .map(|i| GridCoordinate::from_row_column_indices(row, ColumnIndex(i)))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.0 - self.current_row;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_in_row_major_order() {
        let coords = RectGridCellIter::new(RowsCount(2), ColumnsCount(3)).collect::<Vec<_>>();
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(coords,
                   vec![gc(0, 0), gc(0, 1), gc(0, 2), gc(1, 0), gc(1, 1), gc(1, 2)]);
    }

    #[test]
    fn cell_iter_exact_size() {
        let mut iter = RectGridCellIter::new(RowsCount(3), ColumnsCount(3));
        assert_eq!(iter.len(), 9);
        iter.next();
        assert_eq!(iter.len(), 8);
    }

    #[test]
    fn rows_north_to_south() {
        let rows = RectRowIter::new(RowsCount(2), ColumnsCount(2)).collect::<Vec<_>>();
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(rows, vec![vec![gc(0, 0), gc(0, 1)], vec![gc(1, 0), gc(1, 1)]]);
    }
}
