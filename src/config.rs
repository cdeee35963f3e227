use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::units::{CellSize, ColumnsCount, RowsCount, WallSize};
use crate::walls::{WallOptions, MAX_BLOCKS_PER_EDGE};

/// Everything needed to build one maze.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    /// None seeds from the clock, and the layout can then only be reproduced from `Maze::seed`.
    pub seed: Option<u32>,
    pub cell_size: f32,
    pub wall_size: f32,
    pub wall_height: f32,
    /// Distances are measured from here. Defaults to the bottom-left (south-west) corner.
    pub start_cell: Option<GridCoordinate>,
    /// The cell whose east wall is left open. Defaults to the top-right (north-east) corner.
    pub exit_cell: Option<GridCoordinate>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        let walls = WallOptions::default();
        MazeConfig {
            rows: 10,
            columns: 10,
            seed: None,
            cell_size: walls.cell_size.0,
            wall_size: walls.wall_size.0,
            wall_height: walls.wall_height,
            start_cell: None,
            exit_cell: None,
        }
    }
}

impl MazeConfig {
    pub fn new(rows: usize, columns: usize) -> MazeConfig {
        MazeConfig { rows, columns, ..MazeConfig::default() }
    }

    pub fn with_seed(mut self, seed: u32) -> MazeConfig {
        self.seed = Some(seed);
        self
    }

    pub fn with_start_cell(mut self, start: GridCoordinate) -> MazeConfig {
        self.start_cell = Some(start);
        self
    }

    pub fn with_exit_cell(mut self, exit: GridCoordinate) -> MazeConfig {
        self.exit_cell = Some(exit);
        self
    }

    pub fn with_scale(mut self, cell_size: f32, wall_size: f32) -> MazeConfig {
        self.cell_size = cell_size;
        self.wall_size = wall_size;
        self
    }

    #[inline]
    pub fn rows_count(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns_count(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    /// The configured start cell, or the bottom-left corner.
    pub fn start(&self) -> GridCoordinate {
        self.start_cell
            .unwrap_or_else(|| GridCoordinate::new(self.rows.saturating_sub(1) as u32, 0))
    }

    /// The configured exit cell, or the top-right corner.
    pub fn exit(&self) -> GridCoordinate {
        self.exit_cell
            .unwrap_or_else(|| GridCoordinate::new(0, self.columns.saturating_sub(1) as u32))
    }

    pub fn wall_options(&self) -> WallOptions {
        WallOptions {
            cell_size: CellSize(self.cell_size),
            wall_size: WallSize(self.wall_size),
            wall_height: self.wall_height,
            exit_cell: Some(self.exit()),
        }
    }

    /// Check the configuration describes a buildable maze before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            bail!(ErrorKind::InvalidDimensions(self.rows, self.columns));
        }
        let positive = |v: f32| v > 0.0 && v.is_finite();
        if !positive(self.cell_size) || !positive(self.wall_size) {
            bail!(ErrorKind::InvalidScale(self.cell_size, self.wall_size));
        }
        if (self.cell_size / self.wall_size).floor() >= MAX_BLOCKS_PER_EDGE as f32 {
            bail!(ErrorKind::InvalidScale(self.cell_size, self.wall_size));
        }
        if !self.wall_height.is_finite() {
            bail!(ErrorKind::InvalidHeight(self.wall_height));
        }
        for coord in [self.start(), self.exit()].iter() {
            if coord.row as usize >= self.rows || coord.column as usize >= self.columns {
                bail!(ErrorKind::OutOfBounds(coord.row, coord.column));
            }
        }
        Ok(())
    }
}
