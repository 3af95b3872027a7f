//! The yin/yang transition rule.

use rand::Rng;

use crate::cell::Cell;
use crate::grid::Grid;

/// Number of live cells in the Moore neighborhood of (x, y).
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> usize {
    grid.moore_neighbors(x, y).filter(|c| c.is_live()).count()
}

/// Whether the neighborhood of (x, y) holds at least one yin and at least
/// one yang. A single neighbor establishes presence of its own kind only.
pub fn has_mixed_neighbors(grid: &Grid, x: usize, y: usize) -> bool {
    let mut seen_yin = false;
    let mut seen_yang = false;
    for cell in grid.moore_neighbors(x, y) {
        match cell {
            Cell::Yin => seen_yin = true,
            Cell::Yang => seen_yang = true,
            Cell::Dead => {}
        }
        if seen_yin && seen_yang {
            return true;
        }
    }
    false
}

/// Advance the whole grid one generation.
///
/// Every cell is judged against the prior-generation snapshot; the
/// successor grid is built from scratch and returned, so a partially
/// evolved grid is never observable.
pub fn step(grid: &Grid, rng: &mut impl Rng) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    for (x, y, cell) in grid.iter() {
        let n = live_neighbors(grid, x, y);
        let mixed = has_mixed_neighbors(grid, x, y);

        let successor = if cell == Cell::Dead && n == 3 && mixed {
            // Birth: three neighbors with both kinds present
            Cell::random_live(rng)
        } else if cell.is_live() && !(2..=4).contains(&n) {
            // Underpopulation or overcrowding
            Cell::Dead
        } else if cell.is_live() && !mixed {
            // A neighborhood of only one kind does not sustain life
            Cell::Dead
        } else {
            cell
        };
        next.set(x, y, successor);
    }
    next
}
