// Distances are a flood fill from one start cell over the open passages of a grid. The grid
// is immutable once generated, so a Distances value stays valid for as long as the grid it was
// computed from, although nothing stops it being queried against a different grid.

use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::cells::{Direction, Position, PositionSmallVec};
use crate::grid::Grid;


#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Position,
    distances: FnvHashMap<Position, u32>,
    max_distance: u32,
}

impl Distances {
    /// Steps from `start_coordinate` to every cell reachable from it.
    /// Returns None if the start coordinate is not on the grid.
    pub fn for_grid(grid: &Grid, start_coordinate: Position) -> Option<Distances> {

        if !grid.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = FnvHashMap::with_capacity_and_hasher(grid.size(), Default::default());
        distances.insert(start_coordinate, 0);

        // Every link is one step, so the first time a cell is reached is also its shortest
        // distance and the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links: PositionSmallVec = grid.links(*cell_coord).unwrap_or_default();
                for link_coordinate in &links {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Position {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None for cells that are unreachable or off the grid.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Position) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// The cells at the maximum distance, in sorted order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Position; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[Position; 8]>>();
        furthest.sort();
        furthest
    }
}

/// The path from the start of `distances_from_start` to `end_point`, both ends included.
/// Returns None if `end_point` cannot be reached.
pub fn shortest_path(grid: &Grid,
                     distances_from_start: &Distances,
                     end_point: Position)
                     -> Option<Vec<Position>> {

    // The end point is not reachable from start.
    distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let current_distance_to_start = distances_from_start.distance_from_start_to(current_coord)?;

        let closest_to_start = grid.links(current_coord)?
            .iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d))
            })
            .min_by_key(|&(_, distance)| distance);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance_to_start => {
                current_coord = closer_coord;
                path.push(current_coord);
            }
            // Not getting any closer, the distances were computed for some other grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// Works only as long as we are looking at a perfect maze, otherwise you get back some arbitrary
/// path.
pub fn longest_path(grid: &Grid) -> Option<Vec<Position>> {

    // Distances to everywhere from an arbitrary start coordinate
    let first_distances = Distances::for_grid(grid, grid.start())?;

    // The start of the longest path is just the point furthest away from an arbitrary initial point
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::for_grid(grid, long_path_start_coordinate)?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(grid, &distances_from_start, end_point)
}

/// The moves that walk along `path`.
/// Returns None if two consecutive positions are not adjacent.
pub fn directions_along(path: &[Position]) -> Option<Vec<Direction>> {
    path.windows(2)
        .map(|step| step[0].direction_to(step[1]))
        .collect()
}

/// The moves leading from the start cell to the goal cell.
pub fn solve(grid: &Grid) -> Option<Vec<Direction>> {
    let distances = Distances::for_grid(grid, grid.start())?;
    let path = shortest_path(grid, &distances, grid.goal())?;
    directions_along(&path)
}
