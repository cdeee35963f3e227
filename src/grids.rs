use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// Up to 8 * 8 cells; node and passage indices fit in a byte.
pub type SmallGrid = Grid<u8>;
pub type MediumGrid = Grid<u16>;
pub type LargeGrid = Grid<u32>;

pub fn small_grid(rows: RowsCount, columns: ColumnsCount) -> Result<SmallGrid> {
    SmallGrid::new(rows, columns)
}

pub fn medium_grid(rows: RowsCount, columns: ColumnsCount) -> Result<MediumGrid> {
    MediumGrid::new(rows, columns)
}

pub fn large_grid(rows: RowsCount, columns: ColumnsCount) -> Result<LargeGrid> {
    LargeGrid::new(rows, columns)
}
