// The flood fill below gets called "Dijkstra" in a lot of maze writing, but every passage is one
// step long so no priority queue or edge weights are involved: it is a breadth first search.

use std::fmt::{Debug, Display};
use std::ops::Add;

use error_chain::bail;
use num::traits::{Bounded, CheckedAdd, One, ToPrimitive, Unsigned, Zero};
use petgraph::graph::IndexType;
use smallvec::SmallVec;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap};


// Trait (hack) used purely as a generic type parameter alias because it looks ugly to type this out each time
// Note generic parameter type aliases are not in the langauge.
// `type X = Y;` only works with concrete types.
pub trait MaxDistance
    : Zero + One + Bounded + Unsigned + Add + CheckedAdd + ToPrimitive + Debug + Clone + Copy + Display + Ord
    {
}
impl<T> MaxDistance for T
    where T: Zero + One + Bounded + Unsigned + Add + CheckedAdd + ToPrimitive + Debug + Clone + Copy + Display + Ord
{
}


/// Hop counts from one start cell to every cell reachable from it through passages.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT> Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    /// Flood fill outwards from `start_coordinate` one frontier at a time.
    ///
    /// Every passage is one step, so the first time a cell is reached is along a shortest route
    /// and its distance never needs revisiting. The distances map doubles as the visited set.
    ///
    /// Fails with `DistanceOverflow` if some reachable cell is further away than
    /// `MaxDistanceT` can count.
    pub fn new<GridIndexType>(grid: &Grid<GridIndexType>,
                              start_coordinate: GridCoordinate)
                              -> Result<Distances<MaxDistanceT>>
        where GridIndexType: IndexType
    {
        if !grid.is_valid_coordinate(start_coordinate) {
            bail!(ErrorKind::OutOfBounds(start_coordinate.row, start_coordinate.column));
        }

        let mut max: MaxDistanceT = Zero::zero();
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, Zero::zero());

        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell: MaxDistanceT = distances[cell_coord];

                for link_coordinate in grid.links(*cell_coord)?.iter() {
                    if !distances.contains_key(link_coordinate) {
                        let distance_to_link = distance_to_cell
                            .checked_add(&One::one())
                            .ok_or_else(|| ErrorKind::DistanceOverflow(link_coordinate.row,
                                                                       link_coordinate.column))?;
                        distances.insert(*link_coordinate, distance_to_link);
                        new_frontier.push(*link_coordinate);
                        if distance_to_link > max {
                            max = distance_to_link;
                        }
                    }
                }
            }
            frontier = new_frontier;
        }

        Ok(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    /// None if the cell cannot be reached from the start, or is not on the grid at all.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<MaxDistanceT> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distances(&self) -> &FnvHashMap<GridCoordinate, MaxDistanceT> {
        &self.distances
    }

    /// Every cell at the maximum distance, e.g. as candidate goal positions.
    /// Sorted so the choice of "the" furthest point is stable.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[GridCoordinate; 8]>>();
        furthest.sort();
        furthest
    }
}

/// Walk back from `end_point` to the start of `distances_from_start`, always stepping to a linked
/// cell one closer to the start. Returns the path start first, or None if `end_point` was not
/// reached by the flood fill.
pub fn shortest_path<GridIndexType, MaxDistanceT>(grid: &Grid<GridIndexType>,
                                                  distances_from_start: &Distances<MaxDistanceT>,
                                                  end_point: GridCoordinate)
                                                  -> Option<Vec<GridCoordinate>>
    where GridIndexType: IndexType,
          MaxDistanceT: MaxDistance
{
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let (closer_coord, closer_distance) = grid.links(current_coord)
            .ok()?
            .iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d))
            })
            .min_by_key(|&(_, d)| d)?;

        if closer_distance >= current_distance {
            // We have not got any closer to the start, the distances belong to another maze.
            return None;
        }

        current_coord = closer_coord;
        current_distance = closer_distance;
        path.push(current_coord);
    }

    path.reverse();
    Some(path)
}

/// The longest route through the maze: the point furthest from an arbitrary cell is one end of it,
/// the point furthest from that is the other.
/// Only the longest path for a perfect maze; otherwise some long path.
pub fn longest_path<GridIndexType>(grid: &Grid<GridIndexType>) -> Result<Vec<GridCoordinate>>
    where GridIndexType: IndexType
{
    let first_distances = Distances::<u32>::new(grid, GridCoordinate::new(0, 0))?;
    let long_path_start = first_distances.furthest_points_on_grid()[0];

    let distances_from_start = Distances::<u32>::new(grid, long_path_start)?;
    let end_point = distances_from_start.furthest_points_on_grid()[0];

    Ok(shortest_path(grid, &distances_from_start, end_point).unwrap_or_else(Vec::new))
}


#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;

    use super::*;
    use crate::generators;
    use crate::grids::{LargeGrid, SmallGrid};
    use crate::random::Mulberry32;
    use crate::units::{ColumnsCount, RowsCount};

    type SmallDistances = Distances<u8>;

    fn gc(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    fn small_grid(rows: usize, columns: usize) -> SmallGrid {
        SmallGrid::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    fn carved(rows: usize, columns: usize, seed: u32) -> LargeGrid {
        let mut g = LargeGrid::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
        generators::binary_tree(&mut g, &mut Mulberry32::new(seed)).unwrap();
        g
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let g = small_grid(3, 3);
        assert!(SmallDistances::new(&g, gc(3, 3)).is_err());
    }

    #[test]
    fn start() {
        let g = small_grid(3, 3);
        let distances = SmallDistances::new(&g, gc(1, 1)).unwrap();
        assert_eq!(distances.start(), gc(1, 1));
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let g = small_grid(3, 3);
        let start_coordinate = gc(0, 0);
        let distances = SmallDistances::new(&g, start_coordinate).unwrap();
        for coord in g.iter() {
            let d = distances.distance_from_start_to(coord);
            if coord != start_coordinate {
                assert!(d.is_none());
            } else {
                assert_eq!(d, Some(0));
            }
        }
        assert_eq!(distances.reachable_count(), 1);
    }

    #[test]
    fn distances_on_open_grid() {
        let mut g = small_grid(2, 2);
        let top_left = gc(0, 0);
        let top_right = gc(0, 1);
        let bottom_left = gc(1, 0);
        let bottom_right = gc(1, 1);
        g.link(top_left, top_right).expect("Link Failed");
        g.link(top_left, bottom_left).expect("Link Failed");
        g.link(top_right, bottom_right).expect("Link Failed");
        g.link(bottom_left, bottom_right).expect("Link Failed");

        let distances = SmallDistances::new(&g, top_left).unwrap();

        assert_eq!(distances.distance_from_start_to(top_left), Some(0));
        assert_eq!(distances.distance_from_start_to(top_right), Some(1));
        assert_eq!(distances.distance_from_start_to(bottom_left), Some(1));
        assert_eq!(distances.distance_from_start_to(bottom_right), Some(2));
        assert_eq!(distances.max(), 2);
        assert_eq!(&*distances.furthest_points_on_grid(), &[bottom_right]);
    }

    #[test]
    fn seeded_two_by_two_from_bottom_left() {
        let g = carved(2, 2, 12345);
        let distances = Distances::<u32>::new(&g, gc(1, 0)).unwrap();
        assert_eq!(distances.reachable_count(), 4);
        assert_eq!(distances.distance_from_start_to(gc(1, 0)), Some(0));
        assert_eq!(distances.distance_from_start_to(gc(0, 0)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(0, 1)), Some(2));
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(3));
    }

    #[test]
    fn distances_too_long_for_the_distance_type() {
        let g = carved(1, 300, 4);
        match Distances::<u8>::new(&g, gc(0, 0)) {
            Err(Error(ErrorKind::DistanceOverflow(0, 256), _)) => {}
            other => panic!("expected DistanceOverflow, got {:?}", other),
        }
        let distances = Distances::<u16>::new(&g, gc(0, 0)).unwrap();
        assert_eq!(distances.max(), 299);
    }

    #[test]
    fn longest_distance_that_fits_the_distance_type() {
        let g = carved(1, 256, 4);
        let distances = Distances::<u8>::new(&g, gc(0, 0)).unwrap();
        assert_eq!(distances.max(), 255);
        assert_eq!(distances.reachable_count(), 256);
    }

    #[test]
    fn single_cell_distances() {
        let g = carved(1, 1, 0);
        let distances = Distances::<u32>::new(&g, gc(0, 0)).unwrap();
        assert_eq!(distances.reachable_count(), 1);
        assert_eq!(distances.distance_from_start_to(gc(0, 0)), Some(0));
        assert_eq!(distances.max(), 0);
    }

    #[test]
    fn path_through_seeded_maze() {
        let g = carved(2, 2, 12345);
        let distances = Distances::<u32>::new(&g, gc(1, 0)).unwrap();
        assert_eq!(shortest_path(&g, &distances, gc(1, 1)),
                   Some(vec![gc(1, 0), gc(0, 0), gc(0, 1), gc(1, 1)]));
        assert_eq!(shortest_path(&g, &distances, gc(1, 0)), Some(vec![gc(1, 0)]));
    }

    #[test]
    fn no_path_to_unreached_cell() {
        let g = small_grid(2, 2);
        let distances = SmallDistances::new(&g, gc(0, 0)).unwrap();
        assert_eq!(shortest_path(&g, &distances, gc(1, 1)), None);
    }

    #[test]
    fn longest_path_of_a_corridor() {
        let g = carved(1, 5, 8);
        let path = longest_path(&g).unwrap();
        assert_eq!(path.len(), 5);
        let ends = [path[0], path[4]];
        assert!(ends.contains(&gc(0, 0)) && ends.contains(&gc(0, 4)));
    }

    #[test]
    fn quickcheck_full_reachability_and_path_lengths() {
        fn p(seed: u32, rows: u8, columns: u8) -> bool {
            let (rows, columns) = (rows as usize % 12 + 1, columns as usize % 12 + 1);
            let g = carved(rows, columns, seed);
            let start = gc(rows as u32 - 1, 0);
            let distances = Distances::<u32>::new(&g, start).unwrap();

            distances.reachable_count() == rows * columns &&
            distances.distance_from_start_to(start) == Some(0) &&
            g.iter().all(|coord| {
                let d = distances.distance_from_start_to(coord).unwrap();
                let path = shortest_path(&g, &distances, coord).unwrap();
                path.len() == d as usize + 1 &&
                path.windows(2).all(|step| g.is_linked(step[0], step[1]))
            })
        }
        quickcheck(p as fn(u32, u8, u8) -> bool);
    }

    #[test]
    fn quickcheck_neighbouring_distances_differ_by_one() {
        fn p(seed: u32, rows: u8, columns: u8) -> bool {
            let (rows, columns) = (rows as usize % 12 + 1, columns as usize % 12 + 1);
            let g = carved(rows, columns, seed);
            let distances = Distances::<u32>::new(&g, gc(0, 0)).unwrap();
            g.iter().all(|a| {
                g.links(a).unwrap().iter().all(|b| {
                    let (da, db) = (distances.distance_from_start_to(a).unwrap(),
                                    distances.distance_from_start_to(*b).unwrap());
                    da + 1 == db || db + 1 == da
                })
            })
        }
        quickcheck(p as fn(u32, u8, u8) -> bool);
    }
}
