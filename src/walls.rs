//! Turning a carved maze into wall blocks for a 3-D scene.
//!
//! World space puts grid columns along +x and grid rows along +z, with the bottom-left cell's
//! centre at the origin. Every wall edge is built from unit blocks placed `wall_size` apart.

use error_chain::bail;
use petgraph::graph::IndexType;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{CellSize, RowsCount, WallSize};

/// Finer wall spacing than this many blocks along one cell edge is rejected as `InvalidScale`.
pub const MAX_BLOCKS_PER_EDGE: usize = 4096;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> WorldPosition {
        WorldPosition { x, y, z }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WallOptions {
    pub cell_size: CellSize,
    pub wall_size: WallSize,
    /// Height every block is placed at.
    pub wall_height: f32,
    /// The cell whose east edge is left open as the way out. None means the north-east corner.
    pub exit_cell: Option<GridCoordinate>,
}

impl Default for WallOptions {
    fn default() -> WallOptions {
        WallOptions {
            cell_size: CellSize(5.0),
            wall_size: WallSize(1.0),
            wall_height: 1.0,
            exit_cell: None,
        }
    }
}

/// The blocks walling off one side of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct WallRun {
    pub cell: GridCoordinate,
    pub side: CompassPrimary,
    pub blocks: Vec<WorldPosition>,
}

/// World position of a cell's centre at the given height.
pub fn cell_to_position(coord: GridCoordinate, rows: RowsCount, cell_size: CellSize, height: f32) -> WorldPosition {
    let CellSize(size) = cell_size;
    let bottom_row = rows.0 as f32 - 1.0;
    WorldPosition::new(coord.column as f32 * size, height, (coord.row as f32 - bottom_row) * size)
}

/// Every wall run of the maze, cell by cell in row-major order, sides in the order north, west,
/// south, east.
///
/// North and west runs are only needed on the grid boundary, since inner north/west edges are the
/// south/east edge of the neighbouring cell. South and east runs appear wherever the cell is not
/// linked to that neighbour, boundary included, except for the east edge of the exit cell.
/// North/west runs span `[start, end)` of the edge and south/east runs `[start, end]`, so
/// corner blocks can be placed twice.
pub fn wall_runs<GridIndexType>(grid: &Grid<GridIndexType>, options: &WallOptions) -> Result<Vec<WallRun>>
    where GridIndexType: IndexType
{
    let (CellSize(cell_size), WallSize(wall_size)) = (options.cell_size, options.wall_size);
    let last_step = last_step(cell_size, wall_size)?;
    if !options.wall_height.is_finite() {
        bail!(ErrorKind::InvalidHeight(options.wall_height));
    }

    let exit_cell = match options.exit_cell {
        Some(exit) if !grid.is_valid_coordinate(exit) => {
            return Err(ErrorKind::OutOfBounds(exit.row, exit.column).into());
        }
        Some(exit) => exit,
        None => GridCoordinate::new(0, grid.columns().0 as u32 - 1),
    };

    // Shift so wall lines sit half a cell either side of the cell centres.
    let offset_x = -0.5 * cell_size;
    let offset_z = -(grid.rows().0 as f32 - 0.5) * cell_size;
    let height = options.wall_height;

    let steps = |inclusive: bool| -> Vec<f32> {
        (0..=last_step)
            .map(|step| step as f32 * wall_size)
            .take_while(|along| if inclusive { *along <= cell_size } else { *along < cell_size })
            .collect()
    };
    let open_steps = steps(false);
    let closed_steps = steps(true);

    let mut runs = Vec::new();
    for coord in grid.iter() {
        let cell = grid.cell(coord)?;
        let x1 = coord.column as f32 * cell_size + offset_x;
        let x2 = x1 + cell_size;
        let z1 = coord.row as f32 * cell_size + offset_z;
        let z2 = z1 + cell_size;

        let along_x = |z: f32, steps: &[f32]| {
            steps.iter().map(|dx| WorldPosition::new(x1 + dx, height, z)).collect::<Vec<_>>()
        };
        let along_z = |x: f32, steps: &[f32]| {
            steps.iter().map(|dz| WorldPosition::new(x, height, z1 + dz)).collect::<Vec<_>>()
        };
        let mut push_run = |side, blocks| runs.push(WallRun { cell: coord, side, blocks });

        if cell.north().is_none() {
            push_run(CompassPrimary::North, along_x(z1, &open_steps));
        }
        if cell.west().is_none() {
            push_run(CompassPrimary::West, along_z(x1, &open_steps));
        }
        if !grid.is_neighbour_linked(coord, CompassPrimary::South) {
            push_run(CompassPrimary::South, along_x(z2, &closed_steps));
        }
        if coord != exit_cell && !grid.is_neighbour_linked(coord, CompassPrimary::East) {
            push_run(CompassPrimary::East, along_z(x2, &closed_steps));
        }
    }

    Ok(runs)
}

/// Highest step index worth trying along an edge: one past the whole steps that fit, so float
/// rounding in the division cannot drop the final corner block.
fn last_step(cell_size: f32, wall_size: f32) -> Result<usize> {
    let positive = |v: f32| v > 0.0 && v.is_finite();
    if !positive(cell_size) || !positive(wall_size) {
        bail!(ErrorKind::InvalidScale(cell_size, wall_size));
    }
    let whole_steps = (cell_size / wall_size).floor();
    if !(whole_steps < MAX_BLOCKS_PER_EDGE as f32) {
        bail!(ErrorKind::InvalidScale(cell_size, wall_size));
    }
    Ok(whole_steps as usize + 1)
}

/// All wall block positions, flattened from `wall_runs`.
pub fn wall_blocks<GridIndexType>(grid: &Grid<GridIndexType>, options: &WallOptions) -> Result<Vec<WorldPosition>>
    where GridIndexType: IndexType
{
    Ok(wall_runs(grid, options)?
        .into_iter()
        .flat_map(|run| run.blocks)
        .collect())
}
