use std::convert::From;
use std::fmt;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

/// A cell position on a rectangular grid. Row 0 is the northern edge, column 0 the western edge.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: u32,
    pub column: u32,
}

impl GridCoordinate {
    pub fn new(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> GridCoordinate {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        GridCoordinate::new(row as u32, col as u32)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(width) = columns;
        GridCoordinate::new((index / width) as u32, (index % width) as u32)
    }

    /// The coordinate one step away in `dir`, if representable.
    /// Says nothing about whether it lies inside any particular grid.
    pub fn offset(&self, dir: CompassPrimary) -> Option<GridCoordinate> {
        let (row, column) = (self.row, self.column);
        match dir {
            CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::South => row.checked_add(1).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::East => column.checked_add(1).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::West => column.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
        }
    }

    /// Direction of an orthogonally adjacent coordinate, None if the two are not adjacent.
    pub fn direction_to(&self, other: GridCoordinate) -> Option<CompassPrimary> {
        CompassPrimary::ALL.iter()
            .cloned()
            .find(|&dir| self.offset(dir) == Some(other))
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(row_column_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Compass directions, numbered clockwise from north.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        CompassPrimary::ALL[(self as usize + 2) % 4]
    }

    pub fn clockwise(self) -> CompassPrimary {
        CompassPrimary::ALL[(self as usize + 1) % 4]
    }

    pub fn counter_clockwise(self) -> CompassPrimary {
        CompassPrimary::ALL[(self as usize + 3) % 4]
    }
}

/// One grid position and its adjacency, wired once when the grid is built.
/// Passages between cells live in the grid's link graph, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coordinate: GridCoordinate,
    // Indexed by `CompassPrimary as usize`.
    neighbours: [Option<GridCoordinate>; 4],
}

impl Cell {
    pub(crate) fn new(coordinate: GridCoordinate) -> Cell {
        Cell {
            coordinate,
            neighbours: [None; 4],
        }
    }

    pub(crate) fn set_neighbour(&mut self, dir: CompassPrimary, neighbour: GridCoordinate) {
        self.neighbours[dir as usize] = Some(neighbour);
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    #[inline]
    pub fn neighbour(&self, dir: CompassPrimary) -> Option<GridCoordinate> {
        self.neighbours[dir as usize]
    }

    #[inline]
    pub fn north(&self) -> Option<GridCoordinate> {
        self.neighbour(CompassPrimary::North)
    }

    #[inline]
    pub fn south(&self) -> Option<GridCoordinate> {
        self.neighbour(CompassPrimary::South)
    }

    #[inline]
    pub fn east(&self) -> Option<GridCoordinate> {
        self.neighbour(CompassPrimary::East)
    }

    #[inline]
    pub fn west(&self) -> Option<GridCoordinate> {
        self.neighbour(CompassPrimary::West)
    }
}
