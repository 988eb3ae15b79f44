//! Random tile placement module.
//!
//! This module contains the only randomized part of the game: dropping a fresh tile onto an empty
//! board position after every applied move and at game start. The generator is passed in by the
//! caller, so the logic stays deterministic under a seeded generator in tests and reproducible
//! runs.

use rand::Rng;

use crate::board::{Grid, EMPTY_GRID};

/// Probability that a freshly placed tile holds a 4 rather than a 2.
///
/// This constant controls the value distribution of spawned tiles: a 2 appears three times out of
/// four, a 4 once.
pub(crate) const FOUR_TILE_PROBABILITY: f64 = 0.25;

/// Places one random tile on an empty cell of the grid, if any exists.
///
/// This function enumerates every empty coordinate, picks one uniformly at random, and fills it
/// with a 2 or a 4 according to [`FOUR_TILE_PROBABILITY`]. A grid without empty cells is left
/// untouched; a full board is a valid state and not necessarily game over, since merges may still
/// be legal.
pub(crate) fn fill_random<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let empty_coords: Vec<(usize, usize)> = grid
        .iter()
        .enumerate()
        .flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(col_idx, cell)| cell.is_none().then_some((row_idx, col_idx)))
        })
        .collect();

    if empty_coords.is_empty() {
        return;
    }

    let Some(&(row_idx, col_idx)) = empty_coords.get(rng.gen_range(0..empty_coords.len())) else {
        return;
    };

    let value = if rng.gen_bool(FOUR_TILE_PROBABILITY) {
        4
    } else {
        2
    };

    if let Some(cell) = grid.get_mut(row_idx).and_then(|row| row.get_mut(col_idx)) {
        *cell = Some(value);
    }
}

/// Creates the starting board of a new game.
///
/// This function seeds an empty grid with the two initial random tiles, matching the lifecycle of
/// the board: created empty, seeded, then mutated one move and one spawn at a time.
pub(crate) fn new_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = EMPTY_GRID;

    fill_random(&mut grid, rng);
    fill_random(&mut grid, rng);

    grid
}
