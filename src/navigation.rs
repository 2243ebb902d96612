//! Deciding single-step moves through a generated maze.
//!
//! Nothing here mutates state: a caller holds the current `Position`, asks `try_move` what a
//! move would do, and applies the answer itself (see `session::Session`).

use crate::cells::{Direction, Position};
use crate::grid::Grid;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum MoveResult {
    /// A wall is in the way or the move would leave the grid. The position does not change.
    Blocked,
    Moved(Position),
    /// Moved onto the goal cell, `(width - 1, height - 1)`.
    GoalReached(Position),
}

impl MoveResult {
    /// The new position, unless the move was blocked.
    #[inline]
    pub fn position(self) -> Option<Position> {
        match self {
            MoveResult::Blocked => None,
            MoveResult::Moved(coord) | MoveResult::GoalReached(coord) => Some(coord),
        }
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == MoveResult::Blocked
    }

    #[inline]
    pub fn is_goal_reached(self) -> bool {
        match self {
            MoveResult::GoalReached(_) => true,
            _ => false,
        }
    }

    /// Where a caller at `current` ends up after applying this result.
    #[inline]
    pub fn resolve(self, current: Position) -> Position {
        self.position().unwrap_or(current)
    }
}

/// Decide the outcome of moving one cell in `direction` from `position`.
///
/// The move is blocked if the current cell's wall on that side is closed or if the destination
/// is outside the grid; both conditions are checked independently. A `position` that is not on
/// the grid is blocked in every direction.
pub fn try_move(grid: &Grid, position: Position, direction: Direction) -> MoveResult {
    if !grid.is_open(position, direction) {
        return MoveResult::Blocked;
    }

    match grid.neighbour_at_direction(position, direction) {
        None => MoveResult::Blocked,
        Some(destination) if destination == grid.goal() => MoveResult::GoalReached(destination),
        Some(destination) => MoveResult::Moved(destination),
    }
}

#[inline]
pub fn is_goal(grid: &Grid, position: Position) -> bool {
    position == grid.goal()
}
