use docopt::Docopt;
use itertools::Itertools;
use serde_derive::Deserialize;
use maze_blocks::{
    cells::GridCoordinate,
    config::MazeConfig,
    grid_displays::{PathDisplay, StartEndPointsDisplay},
    grid_traits::GridDisplay,
    maze::Maze,
    pathing,
    walls::WorldPosition,
};
use smallvec::smallvec;
use std::{
    fs::File,
    io::prelude::*,
    rc::Rc,
};

const USAGE: &str = "Maze Blocks

Usage:
    maze_blocks_driver -h | --help
    maze_blocks_driver [--rows=<r>] [--columns=<c>] [--seed=<s>] [--cell-size=<n>] [--wall-size=<n>] [--start-row=<r> --start-column=<c>] [--show-path] [--text-out=<path>] [--walls-out=<path>]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of grid rows [default: 10].
    --columns=<c>          Number of grid columns [default: 10].
    --seed=<s>             Seed for the maze layout. Seeded from the clock if not given, the seed used is reported on stderr.
    --cell-size=<n>        World space width of one cell [default: 5].
    --wall-size=<n>        World space spacing of wall blocks along a cell edge [default: 1].
    --start-row=<r>        Row of the cell distances are measured from. Defaults to the bottom-left cell.
    --start-column=<c>     Column of the cell distances are measured from.
    --show-path            Show the path from the start to the exit instead of distances.
    --text-out=<path>      Output file path for the text rendering instead of stdout.
    --walls-out=<path>     Output file path for wall block positions, one 'x y z' line per block.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u32>,
    flag_cell_size: f32,
    flag_wall_size: f32,
    flag_start_row: Option<u32>,
    flag_start_column: Option<u32>,
    flag_show_path: bool,
    flag_text_out: String,
    flag_walls_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_blocks::errors::Error, ::maze_blocks::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        // --help is reported as a non fatal docopt error
        Err(e) if !e.fatal() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let config = maze_config_from_args(&args);
    let mut maze = Maze::generate(&config).chain_err(|| "Failed to generate maze")?;
    eprintln!("seed: {}", maze.seed());

    if args.flag_show_path {
        set_path_display(&mut maze);
    }

    if args.flag_text_out.is_empty() {
        println!("{}", maze);
    } else {
        write_text_to_file(&maze.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_walls_out.is_empty() {
        let data = wall_blocks_text(maze.wall_blocks());
        write_text_to_file(&data, &args.flag_walls_out)
            .chain_err(|| format!("Failed to write wall blocks to {}", args.flag_walls_out))?;
    }

    Ok(())
}

fn maze_config_from_args(maze_args: &MazeArgs) -> MazeConfig {
    let mut config = MazeConfig::new(maze_args.flag_rows, maze_args.flag_columns)
        .with_scale(maze_args.flag_cell_size, maze_args.flag_wall_size);
    config.seed = maze_args.flag_seed;

    if let (Some(row), Some(column)) = (maze_args.flag_start_row, maze_args.flag_start_column) {
        config = config.with_start_cell(GridCoordinate::new(row, column));
    }
    config
}

/// Show the route from the start to the exit, or just mark the two ends if there is no route.
fn set_path_display(maze: &mut Maze) {
    let (start, exit) = (maze.start(), maze.exit());
    let display: Rc<dyn GridDisplay> = match pathing::shortest_path(maze.grid(), maze.distances(), exit) {
        Some(path) => Rc::new(PathDisplay::new(&path)),
        None => Rc::new(StartEndPointsDisplay::new(smallvec![start], smallvec![exit])),
    };
    maze.set_grid_display(Some(display));
}

fn wall_blocks_text(blocks: &[WorldPosition]) -> String {
    let mut data = blocks
        .iter()
        .map(|block| format!("{} {} {}", block.x, block.y, block.z))
        .join("\n");
    data.push('\n');
    data
}

fn write_text_to_file(data: &str, file_name: &str) -> Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
