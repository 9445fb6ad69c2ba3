//! The board and its rules.
//!
//! `BoardState` is the single mutable aggregate. Its `impl` is split by concern:
//!
//! - `state`: construction, reset, queries, pawn moves, winner detection
//! - `movegen`: legal pawn destinations (steps, jumps, side-steps)
//! - `walls`: wall validation and transactional placement
//! - `path`: goal reachability by breadth-first search
//! - `grid`: flat grids and blocked-edge flags backing the state

pub mod grid;
mod movegen;
mod path;
pub mod state;
mod walls;

pub use grid::{EdgeFlags, Grid};
pub use movegen::MoveList;
pub use state::BoardState;
