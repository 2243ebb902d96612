use tracing::{debug, trace};

use crate::cells::{Direction, Position};
use crate::grid::Grid;
use crate::navigation::{try_move, MoveResult};

/// One player walking a maze.
///
/// Owns the current `Position` and changes it only through `step`. Reaching the goal counts a
/// completion and puts the player back on the start cell for another run.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    grid: &'a Grid,
    position: Position,
    moves: usize,
    completions: usize,
}

impl<'a> Session<'a> {
    pub fn new(grid: &'a Grid) -> Session<'a> {
        Session {
            grid,
            position: grid.start(),
            moves: 0,
            completions: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Accepted moves since the current run started.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// How many times the goal has been reached.
    #[inline]
    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Attempt one move and apply the outcome.
    ///
    /// The returned result is the navigator's decision, so a `GoalReached` can still be
    /// announced even though the position is already back at the start.
    pub fn step(&mut self, direction: Direction) -> MoveResult {
        let result = try_move(self.grid, self.position, direction);
        match result {
            MoveResult::Blocked => {
                trace!(position = %self.position, ?direction, "move blocked");
            }
            MoveResult::Moved(destination) => {
                self.position = destination;
                self.moves += 1;
            }
            MoveResult::GoalReached(destination) => {
                self.completions += 1;
                debug!(goal = %destination,
                       moves = self.moves + 1,
                       completions = self.completions,
                       "goal reached");
                self.reset();
            }
        }
        result
    }

    /// Back to the start cell without counting a completion.
    pub fn reset(&mut self) {
        self.position = self.grid.start();
        self.moves = 0;
    }
}
