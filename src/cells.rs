use std::convert::From;
use std::fmt;

use smallvec::SmallVec;

use crate::units::Width;

pub type PositionSmallVec = SmallVec<[Position; 4]>;

/// The four cardinal moves, in the same order as the wall flags of a `Cell`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Index of the wall this direction crosses in `[top, right, bottom, left]`.
    #[inline]
    pub fn wall_index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Column and row delta, `(dcol, drow)`. Rows grow downwards.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Parse one of `U`, `R`, `D` or `L`, ignoring case.
    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'R' => Some(Direction::Right),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Right => 'R',
            Direction::Down => 'D',
            Direction::Left => 'L',
        }
    }
}

/// Wall flags of one maze cell ordered `[top, right, bottom, left]`.
/// `true` means the side is open (passable), `false` means a wall is present.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default, Hash)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    /// A cell with every wall present.
    pub fn closed() -> Cell {
        Cell { walls: [false; 4] }
    }

    #[inline]
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    #[inline]
    pub fn is_open(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }

    pub fn open_sides_count(&self) -> usize {
        self.walls.iter().filter(|&&open| open).count()
    }

    #[inline]
    pub(crate) fn open(&mut self, direction: Direction) {
        self.walls[direction.wall_index()] = true;
    }
}

/// A cell location, `col` is the horizontal (x) index and `row` the vertical (y) index.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Position {
    pub col: u32,
    pub row: u32,
}

impl Position {
    pub fn new(col: u32, row: u32) -> Position {
        Position { col, row }
    }

    /// The fixed start cell of every maze.
    pub fn start() -> Position {
        Position::new(0, 0)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, width: Width) -> Position {
        let Width(row_length) = width;
        Position::new((index % row_length) as u32, (index / row_length) as u32)
    }

    /// No bounds checking against any grid, callers must pass a position valid for `width`.
    #[inline]
    pub fn row_major_index(self, width: Width) -> usize {
        self.row as usize * width.0 + self.col as usize
    }

    /// The position one step away in `direction`.
    /// Returns None if the position is not representable, i.e. it would have a negative index.
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let Position { col, row } = self;
        match direction {
            Direction::Up => row.checked_sub(1).map(|r| Position::new(col, r)),
            Direction::Right => col.checked_add(1).map(|c| Position::new(c, row)),
            Direction::Down => row.checked_add(1).map(|r| Position::new(col, r)),
            Direction::Left => col.checked_sub(1).map(|c| Position::new(c, row)),
        }
    }

    /// Direction of a single step from `self` to an adjacent `other`.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .iter()
            .cloned()
            .find(|&dir| self.offset(dir) == Some(other))
    }
}

impl From<(u32, u32)> for Position {
    fn from(col_row_pair: (u32, u32)) -> Position {
        Position::new(col_row_pair.0, col_row_pair.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
