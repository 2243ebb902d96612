//! **maze_nav** generates perfect grid mazes and decides which moves through them are legal.
//!
//! ```
//! use maze_nav::cells::Direction;
//! use maze_nav::generators;
//! use maze_nav::navigation::{try_move, MoveResult};
//! use maze_nav::units::{Height, Width};
//!
//! let grid = generators::generate_seeded(Width(10), Height(10), 7).unwrap();
//! assert!(grid.is_perfect());
//!
//! // The outer walls are always closed.
//! assert_eq!(try_move(&grid, grid.start(), Direction::Up), MoveResult::Blocked);
//! ```

#![recursion_limit = "1024"] // error_chain

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod navigation;
pub mod pathing;
pub mod session;
pub mod units;
