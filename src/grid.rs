use std::fmt;
use std::slice;

use error_chain::bail;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;

use crate::cells::{Cell, Direction, Position, PositionSmallVec};
use crate::errors::*;
use crate::units::{CellsCount, Height, PassagesCount, Width};


/// A rectangular maze of `width * height` cells stored row by row.
///
/// Once a maze has been generated the grid is read only, walls can only be opened
/// from inside the crate.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<Cell>,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellLinkError {
    InvalidGridCoordinate,
    SelfLink,
    NotAdjacent,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, passages: {:?}",
               self.width,
               self.height,
               self.passages_count())
    }
}

impl Grid {
    /// A grid where every cell has all four walls.
    pub(crate) fn with_walls_closed(width: Width, height: Height) -> Result<Grid> {
        let CellsCount(cells_count) = validate_dimensions(width, height)?;
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::closed(); cells_count],
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn start(&self) -> Position {
        Position::start()
    }

    /// The bottom right cell, `(width - 1, height - 1)`.
    #[inline]
    pub fn goal(&self) -> Position {
        Position::new((self.width.0 - 1) as u32, (self.height.0 - 1) as u32)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Position) -> bool {
        (coord.col as usize) < self.width.0 && (coord.row as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Position) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row_major_index(self.width))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, coord: Position) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Rows of cells from the top (row 0) down.
    pub fn rows(&self) -> slice::Chunks<Cell> {
        self.cells.chunks(self.width.0)
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            width: self.width,
            current_cell_number: 0,
            cells_count: self.size(),
        }
    }

    pub fn neighbour_at_direction(&self, coord: Position, direction: Direction) -> Option<Position> {
        coord.offset(direction)
             .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Cells that are above, below, left or right of a particular cell, but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self, coord: Position) -> PositionSmallVec {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Is the wall on the `direction` side of the cell open?
    /// False for coordinates outside the grid.
    #[inline]
    pub fn is_open(&self, coord: Position, direction: Direction) -> bool {
        self.cell(coord).map_or(false, |cell| cell.is_open(direction))
    }

    /// Cells that are linked to a particular cell by a passage.
    /// Returns None if the coordinate is invalid.
    pub fn links(&self, coord: Position) -> Option<PositionSmallVec> {
        self.cell(coord).map(|cell| {
            Direction::ALL
                .iter()
                .filter(|&&dir| cell.is_open(dir))
                .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
                .collect()
        })
    }

    /// Are two cells in the grid linked?
    pub fn is_linked(&self, a: Position, b: Position) -> bool {
        a.direction_to(b)
         .map_or(false, |dir| self.is_valid_coordinate(b) && self.is_open(a, dir))
    }

    /// Every passage once, as (cell, cell to its right or below).
    pub fn iter_links<'a>(&'a self) -> impl Iterator<Item = (Position, Position)> + 'a {
        self.iter().flat_map(move |coord| {
            [Direction::Right, Direction::Down]
                .iter()
                .filter(|&&dir| self.is_open(coord, dir))
                .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
                .map(|linked| (coord, linked))
                .collect::<SmallVec<[(Position, Position); 2]>>()
        })
    }

    pub fn passages_count(&self) -> PassagesCount {
        PassagesCount(self.iter_links().count())
    }

    /// The undirected graph of cells (nodes in row major order) and passages (edges).
    pub fn passage_graph(&self) -> UnGraph<(), (), u32> {
        let mut graph = UnGraph::with_capacity(self.size(), self.size().saturating_sub(1));
        for _ in 0..self.size() {
            let _ = graph.add_node(());
        }
        for (a, b) in self.iter_links() {
            let a_index = NodeIndex::new(a.row_major_index(self.width));
            let b_index = NodeIndex::new(b.row_major_index(self.width));
            let _ = graph.add_edge(a_index, b_index, ());
        }
        graph
    }

    /// If a cell is open towards a neighbour the neighbour is open back towards it.
    pub fn has_symmetric_walls(&self) -> bool {
        self.iter().all(|coord| {
            Direction::ALL.iter().all(|&dir| {
                self.neighbour_at_direction(coord, dir)
                    .map_or(true, |neighbour| {
                        self.is_open(coord, dir) == self.is_open(neighbour, dir.opposite())
                    })
            })
        })
    }

    /// No cell is open towards the outside of the grid.
    pub fn has_closed_boundary(&self) -> bool {
        self.iter().all(|coord| {
            Direction::ALL
                .iter()
                .filter(|&&dir| self.neighbour_at_direction(coord, dir).is_none())
                .all(|&dir| !self.is_open(coord, dir))
        })
    }

    /// A perfect maze: the passages form a spanning tree over all cells.
    /// `size - 1` edges in a single connected component leaves no room for a cycle.
    pub fn is_perfect(&self) -> bool {
        if !self.has_symmetric_walls() || !self.has_closed_boundary() {
            return false;
        }
        let graph = self.passage_graph();
        graph.edge_count() == self.size() - 1 && connected_components(&graph) == 1
    }

    /// Open the wall between a cell and its neighbour in `direction`, on both sides.
    /// Returns the neighbour, or None if there is no neighbour in that direction.
    pub(crate) fn open_wall(&mut self, coord: Position, direction: Direction) -> Option<Position> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let neighbour = self.neighbour_at_direction(coord, direction)?;
        let width = self.width;
        self.cells[coord.row_major_index(width)].open(direction);
        self.cells[neighbour.row_major_index(width)].open(direction.opposite());
        Some(neighbour)
    }

    /// Link two adjacent cells
    pub(crate) fn link(&mut self, a: Position, b: Position) -> ::std::result::Result<(), CellLinkError> {
        if a == b {
            return Err(CellLinkError::SelfLink);
        }
        if !self.is_valid_coordinate(a) || !self.is_valid_coordinate(b) {
            return Err(CellLinkError::InvalidGridCoordinate);
        }
        let direction = a.direction_to(b).ok_or(CellLinkError::NotAdjacent)?;
        self.open_wall(a, direction)
            .map(|_| ())
            .ok_or(CellLinkError::InvalidGridCoordinate)
    }
}

fn validate_dimensions(width: Width, height: Height) -> Result<CellsCount> {
    let (Width(w), Height(h)) = (width, height);
    let max_side = ::std::u32::MAX as usize;
    if w == 0 || h == 0 || w > max_side || h > max_side {
        bail!(ErrorKind::InvalidDimensions(w, h));
    }
    w.checked_mul(h)
     .map(CellsCount)
     .ok_or_else(|| ErrorKind::InvalidDimensions(w, h).into())
}

#[derive(Clone)]
pub struct CellIter {
    width: Width,
    current_cell_number: usize,
    cells_count: usize,
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Position::from_row_major_index(self.current_cell_number, self.width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
