//! Flat square grids backing the board.
//!
//! `Grid<T>` is a row-major `side x side` array. `EdgeFlags` bundles the four
//! per-cell blocked-edge grids (one per direction) that walls and the outer
//! border write into.

use crate::core::{Direction, Position};

/// Row-major square grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    side: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(side: i32, value: T) -> Self {
        Self {
            side,
            cells: vec![value; (side * side) as usize],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    #[must_use]
    pub fn side(&self) -> i32 {
        self.side
    }

    #[must_use]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        (0..self.side).contains(&row) && (0..self.side).contains(&col)
    }

    fn idx(&self, row: i32, col: i32) -> usize {
        debug_assert!(self.contains(row, col), "({row}, {col}) outside grid of side {}", self.side);
        (row * self.side + col) as usize
    }

    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> &T {
        &self.cells[self.idx(row, col)]
    }

    pub fn set(&mut self, row: i32, col: i32, value: T) {
        let i = self.idx(row, col);
        self.cells[i] = value;
    }
}

/// Blocked-edge flags for every cell, one grid per direction.
///
/// A flag at `(pos, dir)` means a pawn at `pos` may not cross its `dir` edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeFlags {
    north: Grid<bool>,
    south: Grid<bool>,
    east: Grid<bool>,
    west: Grid<bool>,
}

impl EdgeFlags {
    /// All edges open.
    pub fn new(size: i32) -> Self {
        Self {
            north: Grid::new(size, false),
            south: Grid::new(size, false),
            east: Grid::new(size, false),
            west: Grid::new(size, false),
        }
    }

    fn grid(&self, dir: Direction) -> &Grid<bool> {
        match dir {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }

    fn grid_mut(&mut self, dir: Direction) -> &mut Grid<bool> {
        match dir {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }

    #[must_use]
    pub fn is_blocked(&self, pos: Position, dir: Direction) -> bool {
        *self.grid(dir).get(pos.row, pos.col)
    }

    pub fn set(&mut self, pos: Position, dir: Direction, blocked: bool) {
        self.grid_mut(dir).set(pos.row, pos.col, blocked);
    }

    /// Open every edge, then block the four outer borders.
    pub fn reset(&mut self) {
        let size = self.north.side();
        for dir in Direction::ALL {
            self.grid_mut(dir).fill(false);
        }
        for i in 0..size {
            self.north.set(0, i, true);
            self.south.set(size - 1, i, true);
            self.west.set(i, 0, true);
            self.east.set(i, size - 1, true);
        }
    }
}
