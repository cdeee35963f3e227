use petgraph::graph::IndexType;

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::grid::{CoordinateSmallVec, Grid};
use crate::random::{self, Mulberry32};

/// Apply the binary tree maze generation algorithm to a grid.
///
/// It works simply by visiting each cell in row-major order and carving a passage to either its
/// north or its east neighbour. The two directions are fixed for the whole run, otherwise some
/// areas would end up with no way in or out and the maze would not be perfect.
/// The north-east corner has neither neighbour and carves nothing; every other cell carves
/// exactly one passage, so the result is a spanning tree with `size - 1` links.
///
/// The same seed and grid dimensions always carve the same maze.
pub fn binary_tree<GridIndexType>(grid: &mut Grid<GridIndexType>, rng: &mut Mulberry32) -> Result<()>
    where GridIndexType: IndexType
{
    let neighbours_to_check = [CompassPrimary::North, CompassPrimary::East];

    for cell_coord in grid.iter() {

        let neighbours = grid.neighbours_at_directions(cell_coord, &neighbours_to_check)
                             .into_iter()
                             .flatten()
                             .collect::<CoordinateSmallVec>();

        if !neighbours.is_empty() {
            let link_coord = *random::sample_one(rng, &neighbours)?;
            grid.link(cell_coord, link_coord)?;
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::GridCoordinate;
    use crate::grids::{small_grid, LargeGrid};
    use crate::units::{ColumnsCount, RowsCount};
    use quickcheck::{quickcheck, TestResult};

    fn carved(rows: usize, columns: usize, seed: u32) -> LargeGrid {
        let mut g = LargeGrid::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
        binary_tree(&mut g, &mut Mulberry32::new(seed)).unwrap();
        g
    }

    fn link_pairs(g: &LargeGrid) -> Vec<(GridCoordinate, GridCoordinate)> {
        g.iter()
            .flat_map(|a| g.iter().map(move |b| (a, b)))
            .filter(|&(a, b)| a < b && g.is_linked(a, b))
            .collect()
    }

    fn all_reachable(g: &LargeGrid, from: GridCoordinate) -> bool {
        let mut seen = vec![from];
        let mut stack = vec![from];
        while let Some(coord) = stack.pop() {
            for linked in g.links(coord).unwrap().iter() {
                if !seen.contains(linked) {
                    seen.push(*linked);
                    stack.push(*linked);
                }
            }
        }
        seen.len() == g.size()
    }

    #[test]
    fn known_two_by_two_layout() {
        let g = carved(2, 2, 12345);
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(g.links_count(), 3);
        assert!(g.is_linked(gc(0, 0), gc(0, 1)));
        assert!(g.is_linked(gc(1, 0), gc(0, 0)));
        assert!(g.is_linked(gc(1, 1), gc(0, 1)));
        assert!(!g.is_linked(gc(1, 0), gc(1, 1)));
    }

    #[test]
    fn known_three_by_four_layout() {
        let g = carved(3, 4, 7);
        let gc = |r, c| GridCoordinate::new(r, c);
        let expected = vec![
            (gc(0, 0), gc(0, 1)), (gc(0, 1), gc(0, 2)), (gc(0, 2), gc(0, 3)),
            (gc(1, 0), gc(1, 1)), (gc(1, 1), gc(1, 2)), (gc(1, 2), gc(0, 2)),
            (gc(1, 3), gc(0, 3)), (gc(2, 0), gc(1, 0)), (gc(2, 1), gc(2, 2)),
            (gc(2, 2), gc(2, 3)), (gc(2, 3), gc(1, 3)),
        ];
        for &(a, b) in &expected {
            assert!(g.is_linked(a, b), "expected a passage between {} and {}", a, b);
        }
        assert_eq!(g.links_count(), expected.len());
    }

    #[test]
    fn single_cell_has_no_links() {
        let g = carved(1, 1, 1);
        assert_eq!(g.links_count(), 0);
    }

    #[test]
    fn single_row_is_one_corridor() {
        let g = carved(1, 6, 42);
        assert_eq!(g.links_count(), 5);
        for column in 0..5 {
            assert!(g.is_neighbour_linked(GridCoordinate::new(0, column), CompassPrimary::East));
        }
    }

    #[test]
    fn only_north_and_east_passages_are_carved() {
        let g = carved(6, 6, 99);
        for coord in g.iter() {
            let carved_from_here = [CompassPrimary::North, CompassPrimary::East]
                .iter()
                .filter(|dir| g.is_neighbour_linked(coord, **dir))
                .count();
            if coord == GridCoordinate::new(0, 5) {
                assert_eq!(carved_from_here, 0);
            } else {
                assert_eq!(carved_from_here, 1);
            }
        }
    }

    #[test]
    fn carving_a_small_grid() {
        let mut g = small_grid(RowsCount(8), ColumnsCount(8)).unwrap();
        binary_tree(&mut g, &mut Mulberry32::new(5)).unwrap();
        assert_eq!(g.links_count(), 63);
    }

    #[test]
    fn quickcheck_same_seed_same_maze() {
        fn p(seed: u32, rows: u8, columns: u8) -> TestResult {
            let (rows, columns) = (rows as usize % 12 + 1, columns as usize % 12 + 1);
            let first = carved(rows, columns, seed);
            let second = carved(rows, columns, seed);
            TestResult::from_bool(link_pairs(&first) == link_pairs(&second))
        }
        quickcheck(p as fn(u32, u8, u8) -> TestResult);
    }

    #[test]
    fn quickcheck_spanning_tree() {
        fn p(seed: u32, rows: u8, columns: u8) -> bool {
            let (rows, columns) = (rows as usize % 12 + 1, columns as usize % 12 + 1);
            let g = carved(rows, columns, seed);
            g.links_count() == rows * columns - 1 &&
            link_pairs(&g).len() == rows * columns - 1 &&
            all_reachable(&g, GridCoordinate::new(0, 0)) &&
            all_reachable(&g, GridCoordinate::new(rows as u32 - 1, columns as u32 - 1))
        }
        quickcheck(p as fn(u32, u8, u8) -> bool);
    }

    #[test]
    fn quickcheck_links_only_join_neighbours() {
        fn p(seed: u32, rows: u8, columns: u8) -> bool {
            let (rows, columns) = (rows as usize % 10 + 1, columns as usize % 10 + 1);
            let g = carved(rows, columns, seed);
            link_pairs(&g).iter().all(|&(a, b)| a.direction_to(b).is_some())
        }
        quickcheck(p as fn(u32, u8, u8) -> bool);
    }
}
