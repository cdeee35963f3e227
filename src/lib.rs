//! **maze_blocks** carves seeded binary tree mazes, measures distances through them and lays out
//! the wall blocks needed to build them in a 3-D scene.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grid_traits;
pub mod grids;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod units;
pub mod utils;
pub mod walls;
