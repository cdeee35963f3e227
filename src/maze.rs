//! One call from configuration to everything a scene needs: the carved grid, distances from the
//! start cell and the wall blocks.

use std::fmt;
use std::rc::Rc;

use crate::cells::GridCoordinate;
use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators;
use crate::grid_traits::GridDisplay;
use crate::grids::LargeGrid;
use crate::pathing::Distances;
use crate::random::{self, Mulberry32};
use crate::utils::FnvHashMap;
use crate::walls::{self, WorldPosition};

#[derive(Debug)]
pub struct Maze {
    grid: LargeGrid,
    distances: Rc<Distances<u32>>,
    wall_blocks: Vec<WorldPosition>,
    seed: u32,
    exit: GridCoordinate,
}

impl Maze {
    /// Build, carve, solve and wall off a maze.
    /// Nothing is returned unless every stage succeeds.
    pub fn generate(config: &MazeConfig) -> Result<Maze> {
        config.validate()?;

        let mut grid = LargeGrid::new(config.rows_count(), config.columns_count())?;
        let seed = config.seed.unwrap_or_else(random::time_seed);
        let mut rng = Mulberry32::new(seed);
        generators::binary_tree(&mut grid, &mut rng)?;

        let distances = Rc::new(Distances::<u32>::new(&grid, config.start())?);
        grid.set_grid_display(Some(distances.clone() as Rc<dyn GridDisplay>));

        let wall_blocks = walls::wall_blocks(&grid, &config.wall_options())?;

        Ok(Maze {
            grid,
            distances,
            wall_blocks,
            seed,
            exit: config.exit(),
        })
    }

    #[inline]
    pub fn grid(&self) -> &LargeGrid {
        &self.grid
    }

    /// Swap what is drawn inside each cell of the text rendering, None for blank cells.
    /// The passages themselves cannot be changed after generation.
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid.set_grid_display(grid_display);
    }

    #[inline]
    pub fn distances(&self) -> &Distances<u32> {
        &self.distances
    }

    /// Cell to hop count from the start cell.
    pub fn distance_map(&self) -> &FnvHashMap<GridCoordinate, u32> {
        self.distances.distances()
    }

    #[inline]
    pub fn wall_blocks(&self) -> &[WorldPosition] {
        &self.wall_blocks
    }

    /// The seed the layout was carved with, time derived if none was configured.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.distances.start()
    }

    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        self.exit
    }
}

/// The text rendering with distances from the start cell in each cell body.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
