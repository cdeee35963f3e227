use std::fmt;

use petgraph::graph::IndexType;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::{CoordinateSmallVec, Grid};
use crate::grid_traits::GridDisplay;
use crate::pathing::{Distances, MaxDistance};
use crate::utils::{self, FnvHashSet};


impl<MaxDistanceT> GridDisplay for Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    /// Base 36 distance from the start, one glyph up to 35.
    /// Larger distances widen the cell and knock the row out of alignment.
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        match self.distance_from_start_to(coord).and_then(|d| d.to_u64()) {
            Some(d) => format!(" {} ", utils::to_base36(d)),
            None => String::from("   "),
        }
    }
}


#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}


#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {

        let contains_coordinate =
            |coordinates: &CoordinateSmallVec| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            String::from(" S ")
        } else if contains_coordinate(&self.end_coordinates) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}


/// Plain ASCII art of the maze:
///
/// ```text
/// +---+---+
/// | 1   2 |
/// +   +   +
/// | 0 | 3 |
/// +---+---+
/// ```
///
/// Each cell uses the southern wall of the cell above it as its own northern wall, so every row
/// only draws the cell bodies with their eastern boundary (`|` or a space), then the southern
/// boundaries (`---` or three spaces) joined by `+` corners.
impl<GridIndexType> fmt::Display for Grid<GridIndexType>
    where GridIndexType: IndexType
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const CORNER: &str = "+";
        const WALL_UD: &str = "|";
        const WALL_LR_3: &str = "---";
        const OPEN_1: &str = " ";
        const OPEN_3: &str = "   ";
        let default_cell_body = String::from(OPEN_3);

        let mut output = String::from(CORNER);
        for _ in 0..self.columns().0 {
            output.push_str(WALL_LR_3);
            output.push_str(CORNER);
        }
        output.push('\n');

        for row in self.iter_row() {

            // Starts off by rendering the west most boundary of the row
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::from(CORNER);

            for cell_coord in row {

                if let Some(ref displayer) = *self.grid_display() {
                    row_middle_section_render.push_str(&displayer.render_cell_body(cell_coord));
                } else {
                    row_middle_section_render.push_str(&default_cell_body);
                }

                let east_boundary = if self.is_neighbour_linked(cell_coord, CompassPrimary::East) {
                    OPEN_1
                } else {
                    WALL_UD
                };
                row_middle_section_render.push_str(east_boundary);

                let south_boundary = if self.is_neighbour_linked(cell_coord, CompassPrimary::South) {
                    OPEN_3
                } else {
                    WALL_LR_3
                };
                row_bottom_section_render.push_str(south_boundary);
                row_bottom_section_render.push_str(CORNER);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
