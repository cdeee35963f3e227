use std::fmt;
use std::rc::Rc;

use error_chain::bail;
use petgraph::graph::{self, IndexType};
use petgraph::{Directed, Direction, Graph};
use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::grid_traits::GridDisplay;
use crate::random::{self, Mulberry32};
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<GridCoordinate>; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

/// Whether a link/unlink applies to both cells or only from the first to the second.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum LinkMode {
    Bidirectional,
    OneWay,
}

/// A rectangular maze grid.
///
/// Cells live in the nodes of a graph in row-major order, so a coordinate maps straight to a
/// node index. A passage from one cell to another is a directed edge between their nodes.
pub struct Grid<GridIndexType: IndexType = u32> {
    graph: Graph<Cell, (), Directed, GridIndexType>,
    rows: RowsCount,
    columns: ColumnsCount,
    grid_display: Option<Rc<dyn GridDisplay>>,
}

impl<GridIndexType: IndexType> fmt::Debug for Grid<GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: graph: {:?}, rows: {:?}, columns: {:?}",
               self.graph, self.rows, self.columns)
    }
}

impl<GridIndexType: IndexType> Grid<GridIndexType> {
    /// Allocate every cell then wire the four-way adjacency between them.
    ///
    /// Fails if either dimension is zero, or if the cells and the most passages the grid could
    /// ever hold do not fit in `GridIndexType`.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid<GridIndexType>> {

        let (NodesCount(nodes), EdgesCount(edges)) = graph_size(rows, columns)
            .ok_or_else(|| ErrorKind::InvalidDimensions(rows.0, columns.0))?;
        let index_limit = <GridIndexType as IndexType>::max().index();
        if nodes > index_limit || edges > index_limit {
            bail!(ErrorKind::InvalidDimensions(rows.0, columns.0));
        }

        let mut graph = Graph::with_capacity(nodes, edges);
        for coord in RectGridCellIter::new(rows, columns) {
            let _ = graph.add_node(Cell::new(coord));
        }

        let mut grid = Grid {
            graph,
            rows,
            columns,
            grid_display: None,
        };
        grid.configure_cells();

        Ok(grid)
    }

    fn configure_cells(&mut self) {
        for index in 0..self.size() {
            let node = graph::NodeIndex::<GridIndexType>::new(index);
            let coord = self.graph[node].coordinate();
            for dir in CompassPrimary::ALL.iter().cloned() {
                if let Some(adjacent) = coord.offset(dir).filter(|c| self.is_valid_coordinate(*c)) {
                    self.graph[node].set_neighbour(dir, adjacent);
                }
            }
        }
    }

    #[inline]
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid_display = grid_display;
    }

    #[inline]
    pub fn grid_display(&self) -> &Option<Rc<dyn GridDisplay>> {
        &self.grid_display
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// The cell at a coordinate, with its adjacency.
    pub fn cell(&self, coord: GridCoordinate) -> Result<&Cell> {
        let index = self.graph_index(coord)?;
        Ok(&self.graph[index])
    }

    pub fn random_cell(&self, rng: &mut Mulberry32) -> Result<GridCoordinate> {
        let row = random::random_int(rng, self.rows.0)?;
        let column = random::random_int(rng, self.columns.0)?;
        Ok(GridCoordinate::new(row as u32, column as u32))
    }

    /// Link two cells with a passage in both directions. Linking already linked cells is a no-op.
    ///
    /// Adjacency is not checked: only link cells that are neighbours.
    #[inline]
    pub fn link(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        self.link_with(a, b, LinkMode::Bidirectional)
    }

    pub fn link_with(&mut self, a: GridCoordinate, b: GridCoordinate, mode: LinkMode) -> Result<()> {
        if a == b {
            bail!(ErrorKind::SelfLink(a.row, a.column));
        }
        let a_index = self.graph_index(a)?;
        let b_index = self.graph_index(b)?;

        let _ = self.graph.update_edge(a_index, b_index, ());
        if mode == LinkMode::Bidirectional {
            let _ = self.graph.update_edge(b_index, a_index, ());
        }
        Ok(())
    }

    /// Remove the passage between two cells in both directions.
    /// Returns true if there was a passage to remove.
    #[inline]
    pub fn unlink(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<bool> {
        self.unlink_with(a, b, LinkMode::Bidirectional)
    }

    pub fn unlink_with(&mut self, a: GridCoordinate, b: GridCoordinate, mode: LinkMode) -> Result<bool> {
        let a_index = self.graph_index(a)?;
        let b_index = self.graph_index(b)?;

        // Removing an edge invalidates the last edge index in the graph, which is fine as we
        // never store edge indices.
        let mut removed = false;
        if let Some(edge_index) = self.graph.find_edge(a_index, b_index) {
            self.graph.remove_edge(edge_index);
            removed = true;
        }
        if mode == LinkMode::Bidirectional {
            if let Some(edge_index) = self.graph.find_edge(b_index, a_index) {
                self.graph.remove_edge(edge_index);
                removed = true;
            }
        }
        Ok(removed)
    }

    /// Are two cells joined by a passage? The answer is the same whichever way round the
    /// cells are given, even for one way links. Coordinates outside the grid are never linked.
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        match (self.graph_index(a), self.graph_index(b)) {
            (Ok(a_index), Ok(b_index)) => {
                self.graph.find_edge(a_index, b_index).is_some() ||
                self.graph.find_edge(b_index, a_index).is_some()
            }
            _ => false,
        }
    }

    /// Is `coord` linked to its neighbour in `direction`? False at the grid boundary.
    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// Cells that this cell has a passage to.
    pub fn links(&self, coord: GridCoordinate) -> Result<CoordinateSmallVec> {
        let index = self.graph_index(coord)?;
        Ok(self.graph
            .neighbors_directed(index, Direction::Outgoing)
            .map(|linked_index| self.graph[linked_index].coordinate())
            .collect())
    }

    /// Number of linked cell pairs, counting a two way passage once.
    pub fn links_count(&self) -> usize {
        self.graph
            .raw_edges()
            .iter()
            .filter(|edge| {
                edge.source() < edge.target() ||
                self.graph.find_edge(edge.target(), edge.source()).is_none()
            })
            .count()
    }

    /// Cells to the North, South, East or West of a cell, but not necessarily linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> Result<CoordinateSmallVec> {
        let cell = self.cell(coord)?;
        Ok([CompassPrimary::North, CompassPrimary::South, CompassPrimary::East, CompassPrimary::West]
            .iter()
            .filter_map(|dir| cell.neighbour(*dir))
            .collect())
    }

    pub fn neighbours_at_directions(&self,
                                    coord: GridCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// The adjacent cell in `direction`; None at the boundary or for a coordinate off the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        self.cell(coord).ok().and_then(|cell| cell.neighbour(direction))
    }

    /// Directions a walker standing in `coord` can move in, clockwise from north.
    pub fn passable_directions(&self, coord: GridCoordinate) -> Result<DirectionSmallVec> {
        let _ = self.graph_index(coord)?;
        Ok(CompassPrimary::ALL
            .iter()
            .cloned()
            .filter(|dir| self.is_neighbour_linked(coord, *dir))
            .collect())
    }

    /// A uniformly chosen passable direction, e.g. for something wandering the maze.
    pub fn random_passage(&self, coord: GridCoordinate, rng: &mut Mulberry32) -> Result<CompassPrimary> {
        let directions = self.passable_directions(coord)?;
        random::sample_one(rng, &directions).map(|dir| *dir)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.columns.0 + coord.column as usize)
        } else {
            None
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.row as usize) < self.rows.0 && (coord.column as usize) < self.columns.0
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(self.rows, self.columns)
    }

    #[inline]
    fn graph_index(&self, coord: GridCoordinate) -> Result<graph::NodeIndex<GridIndexType>> {
        self.grid_coordinate_to_index(coord)
            .map(graph::NodeIndex::<GridIndexType>::new)
            .ok_or_else(|| ErrorKind::OutOfBounds(coord.row, coord.column).into())
    }
}

/// Node count and the largest number of directed passages a rows * columns grid can hold.
/// None if a dimension is zero or does not fit a coordinate.
fn graph_size(rows: RowsCount, columns: ColumnsCount) -> Option<(NodesCount, EdgesCount)> {
    let (RowsCount(r), ColumnsCount(c)) = (rows, columns);
    if r == 0 || c == 0 || r > u32::MAX as usize || c > u32::MAX as usize {
        return None;
    }
    let nodes = r.checked_mul(c)?;
    let horizontal_pairs = r.checked_mul(c - 1)?;
    let vertical_pairs = c.checked_mul(r - 1)?;
    let edges = horizontal_pairs.checked_add(vertical_pairs)?.checked_mul(2)?;
    Some((NodesCount(nodes), EdgesCount(edges)))
}
