use bit_set::BitSet;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;
use tracing::debug;

use crate::cells::{Direction, Position};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Generate a perfect maze with the recursive backtracker algorithm.
///
/// Starting from a random cell, it performs a random walk that avoids previously visited cells,
/// carving a passage at every step. When the walk reaches a dead end (no unvisited neighbours)
/// it backtracks along the path stack to the most recent cell that still has unvisited
/// neighbours and carries on from there. The start cell stays on the stack until every cell has
/// been visited, so the walk touches all `width * height` cells and carves exactly one fewer
/// passages than that: a spanning tree.
///
/// The mazes have long twisty corridors with relatively few dead ends. Memory use is one bit per
/// cell for the visited set plus a stack as long as the longest path walked.
///
/// All randomness comes from `rng`, so a seeded generator always produces the same maze.
/// Fails with `ErrorKind::InvalidDimensions` if either side is zero.
pub fn generate<R>(width: Width, height: Height, rng: &mut R) -> Result<Grid>
    where R: Rng + ?Sized
{
    let mut grid = Grid::with_walls_closed(width, height)?;
    let cells_count = grid.size();

    let mut visited = BitSet::with_capacity(cells_count);
    let start = Position::from_row_major_index(rng.gen_range(0..cells_count), width);
    visited.insert(start.row_major_index(width));
    let mut visited_count = 1;
    let mut path = vec![start];

    while visited_count < cells_count {

        let current = match path.last() {
            Some(&coord) => coord,
            None => break,
        };

        let unvisited_neighbours = Direction::ALL
            .iter()
            .filter_map(|&dir| grid.neighbour_at_direction(current, dir).map(|coord| (dir, coord)))
            .filter(|&(_, coord)| !visited.contains(coord.row_major_index(width)))
            .collect::<SmallVec<[(Direction, Position); 4]>>();

        if unvisited_neighbours.is_empty() {
            // Dead end, resume from the cell we came from.
            path.pop();
        } else {
            let sample = rng.gen_range(0..unvisited_neighbours.len());
            let (direction, next) = unvisited_neighbours[sample];

            grid.open_wall(current, direction);
            visited.insert(next.row_major_index(width));
            visited_count += 1;
            path.push(next);
        }
    }

    debug!(width = width.0,
           height = height.0,
           start = %start,
           passages = visited_count - 1,
           "generated maze");

    Ok(grid)
}

/// `generate` driven by an `XorShiftRng` seeded with `seed`.
pub fn generate_seeded(width: Width, height: Height, seed: u64) -> Result<Grid> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    generate(width, height, &mut rng)
}


#[cfg(test)]
mod tests {

    use petgraph::algo::is_cyclic_undirected;
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::units::PassagesCount;

    fn maze(w: usize, h: usize, seed: u64) -> Grid {
        generate_seeded(Width(w), Height(h), seed).expect("valid maze dimensions")
    }

    #[test]
    fn invalid_dimensions_fail() {
        for &(w, h) in &[(0, 0), (0, 3), (3, 0)] {
            let result = generate_seeded(Width(w), Height(h), 7);
            match result {
                Err(Error(ErrorKind::InvalidDimensions(ew, eh), _)) => assert_eq!((ew, eh), (w, h)),
                other => panic!("expected invalid dimensions error, got {:?}", other),
            }
        }
    }

    #[test]
    fn invalid_dimensions_message() {
        let err = generate_seeded(Width(0), Height(4), 1).unwrap_err();
        assert!(err.to_string().contains("0x4"));
    }

    #[test]
    fn single_cell_maze() {
        let g = maze(1, 1, 42);
        assert_eq!(g.size(), 1);
        assert_eq!(g.passages_count(), PassagesCount(0));
        assert_eq!(g.cell(Position::new(0, 0)).unwrap().walls(), [false; 4]);
        assert!(g.is_perfect());
    }

    #[test]
    fn two_cell_maze_opens_the_shared_wall_only() {
        for seed in 0..20 {
            let g = maze(2, 1, seed);
            assert_eq!(g.passages_count(), PassagesCount(1));
            assert_eq!(g.cell(Position::new(0, 0)).unwrap().walls(), [false, true, false, false]);
            assert_eq!(g.cell(Position::new(1, 0)).unwrap().walls(), [false, false, false, true]);
        }
    }

    #[test]
    fn mazes_are_perfect() {
        for &(w, h) in &[(1, 7), (7, 1), (2, 2), (3, 3), (10, 10), (31, 17)] {
            let g = maze(w, h, (w * 100 + h) as u64);
            assert_eq!(g.passages_count(), PassagesCount(w * h - 1));
            assert!(g.has_symmetric_walls());
            assert!(g.has_closed_boundary());
            assert!(!is_cyclic_undirected(&g.passage_graph()));
            assert!(g.is_perfect());
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = maze(12, 9, 1234);
        let b = maze(12, 9, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_mazes() {
        let mazes: Vec<Grid> = (0..8).map(|seed| maze(10, 10, seed)).collect();
        let all_the_same = mazes.iter().all(|g| *g == mazes[0]);
        assert!(!all_the_same);
    }

    #[test]
    fn accepts_any_injected_rng() {
        let mut rng = rand::thread_rng();
        let g = generate(Width(6), Height(5), &mut rng).unwrap();
        assert!(g.is_perfect());

        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let g = generate(Width(5), Height(6), dyn_rng).unwrap();
        assert!(g.is_perfect());
    }

    #[test]
    fn quickcheck_spanning_tree() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = ((w % 16) as usize, (h % 16) as usize);
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let g = maze(w, h, seed);
            TestResult::from_bool(g.is_perfect() && g.passages_count() == PassagesCount(w * h - 1))
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }
}
