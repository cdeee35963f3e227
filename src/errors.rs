// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
use error_chain::*;

error_chain! {

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} rows by {} columns", rows, columns)
        }

        EmptyInput {
            description("cannot sample from an empty sequence")
            display("cannot sample from an empty sequence")
        }

        OutOfBounds(row: u32, column: u32) {
            description("grid coordinate out of bounds")
            display("grid coordinate (row {}, column {}) is outside the grid", row, column)
        }

        SelfLink(row: u32, column: u32) {
            description("a cell cannot be linked to itself")
            display("cell (row {}, column {}) cannot be linked to itself", row, column)
        }

        InvalidScale(cell_size: f32, wall_size: f32) {
            description("invalid wall scale")
            display("cell size {} and wall size {} must both be positive, with at most {} blocks per cell edge",
                    cell_size, wall_size, crate::walls::MAX_BLOCKS_PER_EDGE)
        }

        InvalidHeight(height: f32) {
            description("invalid wall height")
            display("wall height {} must be finite", height)
        }

        DistanceOverflow(row: u32, column: u32) {
            description("distance does not fit the distance type")
            display("distance to cell (row {}, column {}) does not fit the distance type", row, column)
        }
    }
}
