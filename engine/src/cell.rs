//! Cell states of the automaton.

use rand::Rng;

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Yin,
    Yang,
}

impl Cell {
    pub fn is_live(self) -> bool {
        self != Cell::Dead
    }

    /// Next state in the edit cycle Dead -> Yin -> Yang -> Dead.
    pub fn cycled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Yin,
            Cell::Yin => Cell::Yang,
            Cell::Yang => Cell::Dead,
        }
    }

    /// Uniform draw between yin and yang, used for births.
    pub fn random_live(rng: &mut impl Rng) -> Cell {
        if rng.gen_bool(0.5) { Cell::Yin } else { Cell::Yang }
    }
}
