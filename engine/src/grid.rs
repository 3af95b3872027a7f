//! 2D cell grid with bounds-checked access.

use rand::Rng;

use crate::cell::Cell;
use crate::error::{GridError, Result};

/// Default playing-field dimensions.
pub const GRID_WIDTH: usize = 30;
pub const GRID_HEIGHT: usize = 30;

/// Relative offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A fixed-size rectangular grid of cells. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Grid with every cell independently randomized: a first coin flip
    /// decides dead or live, a second picks yin or yang for the live half.
    pub fn random(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let mut grid = Self::new(width, height);
        for cell in &mut grid.cells {
            *cell = if rng.gen_bool(0.5) {
                Cell::Dead
            } else {
                Cell::random_live(rng)
            };
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Cell at (x, y). Panics when out of bounds; rule and paint loops only
    /// produce in-bounds coordinates.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(self.in_bounds(x, y), "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(self.in_bounds(x, y), "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x] = cell;
    }

    /// Replace the cell at (x, y) with the next state in the edit cycle and
    /// return the new state. Exactly one cell changes. Out-of-bounds
    /// coordinates are rejected, never clamped here.
    pub fn cycle(&mut self, x: usize, y: usize) -> Result<Cell> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let next = self.get(x, y).cycled();
        self.set(x, y, next);
        Ok(next)
    }

    /// The Moore neighborhood of (x, y), clipped at the grid edges. Yields
    /// at most eight cells and never wraps around.
    pub fn moore_neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Cell> + '_ {
        let (x, y) = (x as isize, y as isize);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height {
                Some(self.get(nx as usize, ny as usize))
            } else {
                None
            }
        })
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % self.width, i / self.width, cell))
    }
}
