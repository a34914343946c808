//! Discrete grid over a continuous coordinate plane.

pub mod board;
pub mod cell;
pub mod point;

pub use board::{Board, BoardConfig, MAX_VISIBILITY_RADIUS};
pub use cell::Cell;
pub use point::{Bounds, Direction, Point};
