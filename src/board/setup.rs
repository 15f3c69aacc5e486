//! Board constructors for demos, tests and benches.

use rand::Rng;

use super::grid::{Grid, BLACK, EMPTY, WHITE};

/// Default board dimension when the caller supplies no grid.
pub const DEFAULT_SIZE: u32 = 10;

/// Stones placed on the demo position: two white, one black.
const DEMO_STONES: [(u32, u32, u32); 3] = [(1, 2, WHITE), (2, 2, WHITE), (2, 3, BLACK)];

/// Builds the demo position on a `size x size` board.
///
/// Stones that would fall outside a small board are skipped.
pub fn demo_board(size: u32) -> Grid {
    let mut grid = Grid::square(size);
    for (row, col, value) in DEMO_STONES {
        grid.set(row, col, value);
    }
    grid
}

/// Builds a `size x size` board where each cell independently holds a stone
/// with probability `density`. Stone colours are picked uniformly.
pub fn random_board<R: Rng>(size: u32, density: f64, rng: &mut R) -> Grid {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut grid = Grid::square(size);
    for row in 0..size {
        for col in 0..size {
            let value = if rng.gen_bool(density) {
                if rng.gen_bool(0.5) {
                    WHITE
                } else {
                    BLACK
                }
            } else {
                EMPTY
            };
            grid.set(row, col, value);
        }
    }
    grid
}
