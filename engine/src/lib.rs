//! Rule engine for a three-state (dead / yin / yang) Game of Life variant.
//!
//! Cells live on a fixed-size rectangular grid with no wraparound. A dead
//! cell is born when exactly three live neighbors of both kinds surround it;
//! live cells die outside the two-to-four population band, and die regardless
//! of count when their neighborhood holds only their own kind.

pub mod cell;
pub mod error;
pub mod grid;
pub mod rules;

pub use cell::Cell;
pub use error::{GridError, Result};
pub use grid::{GRID_HEIGHT, GRID_WIDTH, Grid};
