//! Board engine module.
//!
//! This module contains the pure board-transition logic of the game: sliding and merging the tiles
//! of a 4x4 grid in one of four directions, and enumerating which directions constitute a legal
//! move from a given board. All functions here are deterministic and free of side effects; the
//! random tile placement that follows a move lives in the [`spawn`](crate::spawn) module.

use crate::types::Direction;

/// Side length of the square game board.
///
/// This constant fixes the board to the standard 4x4 layout of the game. It sizes both the grid
/// arrays and the per-line slide scans.
pub(crate) const GRID_SIZE: usize = 4;

/// A single board position.
///
/// This type holds either `None` for an empty position or `Some` power-of-two tile value. A `u32`
/// is wide enough that overflow is practically unreachable: producing a 2^31 tile would require
/// more merged material than the 4x4 board can ever hold.
pub(crate) type Cell = Option<u32>;

/// The full game board as a row-major 4x4 array of cells.
///
/// This type is `Copy`, so slides produce fresh boards while the caller keeps the original for
/// the cell-by-cell legality comparison.
pub(crate) type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

/// A board with every cell empty.
///
/// This constant is the starting point of a new game before the initial random tiles are placed.
pub(crate) const EMPTY_GRID: Grid = [[None; GRID_SIZE]; GRID_SIZE];

/// Packs the non-empty cells of a line toward the high-index end.
///
/// This function performs the compaction step of a slide: non-empty cells keep their relative
/// order but move as far toward the end of the line as the empty cells allow. It is applied both
/// before and after the merge pass, so gaps opened by merges are closed again.
fn compact(line: [Cell; GRID_SIZE]) -> [Cell; GRID_SIZE] {
    let mut compacted = [None; GRID_SIZE];

    for (slot, value) in compacted
        .iter_mut()
        .rev()
        .zip(line.iter().rev().filter_map(|cell| *cell))
    {
        *slot = Some(value);
    }

    compacted
}

/// Slides and merges a single line toward its high-index end.
///
/// This function implements the canonical slide-right routine: compaction, a single backward merge
/// pass, and re-compaction. The merge scan visits each position exactly once from the end of the
/// line toward its start, so every cell participates in at most one merge per move and merges
/// never cascade within a single slide. Two equal neighbors collapse into one cell holding double
/// their value, which keeps the sum of the line unchanged.
#[expect(
    clippy::indexing_slicing,
    reason = "Scan indices are derived from the fixed line length; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "Scan indices are derived from the fixed line length; there is no risk of bad indexing."
)]
pub(crate) fn slide_line(line: [Cell; GRID_SIZE]) -> [Cell; GRID_SIZE] {
    let mut line = compact(line);

    for idx in (1..GRID_SIZE).rev() {
        if line[idx].is_some() && line[idx] == line[idx - 1] {
            line[idx] = line[idx].map(|value| value * 2);
            line[idx - 1] = None;
        }
    }

    compact(line)
}

/// Builds a mirrored copy of the grid with every row reversed.
///
/// This function is one of the two coordinate transforms that reduce all four directions to the
/// single slide-right routine. Mirroring maps a leftward slide onto a rightward one and is its own
/// inverse.
pub(crate) fn mirror(grid: &Grid) -> Grid {
    let mut mirrored = *grid;

    for row in &mut mirrored {
        row.reverse();
    }

    mirrored
}

/// Swaps the rows and columns of the grid.
///
/// This function is the second coordinate transform around the slide-right routine. Transposing
/// maps a downward slide onto a rightward one and is its own inverse; combined with
/// [`mirror`] it also covers the upward slide.
#[expect(
    clippy::indexing_slicing,
    reason = "Both indices come from enumerating the fixed-size grid; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "Both indices come from enumerating the fixed-size grid; there is no risk of bad indexing."
)]
pub(crate) fn transpose(grid: &Grid) -> Grid {
    let mut transposed = EMPTY_GRID;

    for (row_idx, row) in grid.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            transposed[col_idx][row_idx] = *cell;
        }
    }

    transposed
}

/// Computes the board that results from sliding the grid in the given direction.
///
/// This function expresses each direction as a pair of coordinate transforms wrapped around the
/// canonical [`slide_line`] routine, so only one slide-and-merge algorithm exists in the crate.
/// The rightward slide needs no transform, the leftward slide mirrors each row, the downward slide
/// transposes the grid, and the upward slide composes both transforms.
pub(crate) fn slide(grid: &Grid, direction: Direction) -> Grid {
    let mut working = match direction {
        Direction::Right => *grid,
        Direction::Left => mirror(grid),
        Direction::Down => transpose(grid),
        Direction::Up => mirror(&transpose(grid)),
    };

    for row in &mut working {
        *row = slide_line(*row);
    }

    match direction {
        Direction::Right => working,
        Direction::Left => mirror(&working),
        Direction::Down => transpose(&working),
        Direction::Up => transpose(&mirror(&working)),
    }
}

/// Enumerates the directions that change the board, together with their resulting grids.
///
/// This function slides the grid in all four directions and keeps only those whose result differs
/// cell-by-cell from the input. The returned list is ordered by [`Direction::ALL`]. An empty list
/// means no move can change the board, which is the authoritative game-over condition.
pub(crate) fn legal_moves(grid: &Grid) -> Vec<(Direction, Grid)> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| {
            let slid = slide(grid, direction);
            (slid != *grid).then_some((direction, slid))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a line from plain values, with zero standing in for an empty cell.
    fn line(values: [u32; GRID_SIZE]) -> [Cell; GRID_SIZE] {
        values.map(|value| (value != 0).then_some(value))
    }

    /// Builds a grid from plain values, with zero standing in for an empty cell.
    fn grid(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Grid {
        values.map(line)
    }

    /// Sums the tile values of a line, counting empty cells as zero.
    fn line_sum(cells: [Cell; GRID_SIZE]) -> u32 {
        cells.iter().flatten().sum()
    }

    #[test]
    fn test_slide_line_merges_pair_across_empty_space() {
        assert_eq!(slide_line(line([2, 2, 0, 0])), line([0, 0, 0, 4]));
    }

    #[test]
    fn test_slide_line_compacts_then_merges() {
        assert_eq!(slide_line(line([2, 0, 2, 4])), line([0, 0, 4, 4]));
    }

    #[test]
    fn test_slide_line_merges_each_tile_at_most_once() {
        // Four equal tiles collapse pairwise, never into a single tile.
        assert_eq!(slide_line(line([2, 2, 2, 2])), line([0, 0, 4, 4]));
    }

    #[test]
    fn test_slide_line_never_cascades_merges() {
        // The freshly merged 4 must not immediately merge with the neighboring 4.
        assert_eq!(slide_line(line([0, 2, 2, 4])), line([0, 0, 4, 4]));
    }

    #[test]
    fn test_slide_line_empty_line_is_a_no_op() {
        assert_eq!(slide_line(line([0, 0, 0, 0])), line([0, 0, 0, 0]));
    }

    #[test]
    fn test_slide_line_single_tile_moves_to_the_end() {
        assert_eq!(slide_line(line([2, 0, 0, 0])), line([0, 0, 0, 2]));
        assert_eq!(slide_line(line([0, 0, 0, 2])), line([0, 0, 0, 2]));
    }

    #[test]
    fn test_slide_line_packs_tiles_toward_the_high_end() {
        let samples = [
            line([2, 0, 4, 0]),
            line([8, 2, 0, 2]),
            line([0, 16, 0, 0]),
            line([2, 2, 4, 4]),
        ];

        for sample in samples {
            let slid = slide_line(sample);

            assert!(
                slid.iter()
                    .skip_while(|cell| cell.is_none())
                    .all(|cell| cell.is_some()),
                "no empty cell may remain to the left of a tile in {slid:?}"
            );
        }
    }

    #[test]
    fn test_slide_line_preserves_tile_sum() {
        let samples = [
            line([2, 2, 0, 0]),
            line([2, 0, 2, 4]),
            line([2, 2, 2, 2]),
            line([4, 8, 16, 32]),
            line([0, 0, 0, 0]),
        ];

        for sample in samples {
            assert_eq!(
                line_sum(slide_line(sample)),
                line_sum(sample),
                "sliding must not change the sum of {sample:?}"
            );
        }
    }

    #[test]
    fn test_slide_moves_tiles_in_each_direction() {
        let board = grid([
            [2, 0, 0, 2],
            [0, 0, 0, 0],
            [0, 4, 0, 0],
            [0, 0, 0, 0],
        ]);

        assert_eq!(
            slide(&board, Direction::Right),
            grid([
                [0, 0, 0, 4],
                [0, 0, 0, 0],
                [0, 0, 0, 4],
                [0, 0, 0, 0],
            ])
        );
        assert_eq!(
            slide(&board, Direction::Left),
            grid([
                [4, 0, 0, 0],
                [0, 0, 0, 0],
                [4, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
        assert_eq!(
            slide(&board, Direction::Up),
            grid([
                [2, 4, 0, 2],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
        assert_eq!(
            slide(&board, Direction::Down),
            grid([
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [2, 4, 0, 2],
            ])
        );
    }

    #[test]
    fn test_slide_is_idempotent_when_no_new_merges_arise() {
        let board = grid([
            [2, 0, 0, 2],
            [0, 0, 0, 0],
            [0, 4, 0, 0],
            [0, 0, 0, 0],
        ]);

        for direction in Direction::ALL {
            let once = slide(&board, direction);

            assert_eq!(
                slide(&once, direction),
                once,
                "sliding an already slid board {direction:?} again must change nothing"
            );
        }
    }

    #[test]
    fn test_transpose_is_its_own_inverse() {
        let board = grid([
            [2, 4, 8, 16],
            [0, 2, 0, 4],
            [32, 0, 2, 0],
            [0, 8, 0, 2],
        ]);

        assert_eq!(transpose(&transpose(&board)), board);
    }

    #[test]
    fn test_mirror_reverses_every_row() {
        let board = grid([
            [2, 4, 0, 0],
            [0, 0, 0, 8],
            [0, 0, 0, 0],
            [16, 0, 0, 2],
        ]);

        assert_eq!(
            mirror(&board),
            grid([
                [0, 0, 4, 2],
                [8, 0, 0, 0],
                [0, 0, 0, 0],
                [2, 0, 0, 16],
            ])
        );
        assert_eq!(mirror(&mirror(&board)), board);
    }

    #[test]
    fn test_legal_moves_reports_matching_slide_results() {
        let board = grid([
            [2, 0, 0, 2],
            [0, 0, 0, 0],
            [0, 4, 0, 0],
            [0, 0, 0, 0],
        ]);

        let moves = legal_moves(&board);

        assert_eq!(moves.len(), 4, "every direction moves tiles on this board");
        for (direction, result) in moves {
            assert_ne!(result, board);
            assert_eq!(result, slide(&board, direction));
        }
    }

    #[test]
    fn test_legal_moves_on_full_board_with_one_mergeable_row() {
        // Only the top row holds an adjacent equal pair; the columns hold none, so the full
        // board admits horizontal moves only.
        let board = grid([
            [2, 2, 4, 8],
            [4, 8, 2, 4],
            [8, 2, 4, 8],
            [2, 4, 8, 2],
        ]);

        let moves = legal_moves(&board);
        let directions: Vec<Direction> = moves.iter().map(|&(direction, _)| direction).collect();

        assert_eq!(directions, vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn test_legal_moves_empty_exactly_on_stuck_board() {
        let stuck = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);

        assert!(legal_moves(&stuck).is_empty());
    }

    #[test]
    fn test_legal_move_never_increases_tile_count() {
        let board = grid([
            [2, 2, 4, 0],
            [0, 4, 0, 4],
            [8, 0, 8, 0],
            [2, 0, 0, 2],
        ]);
        let count = |candidate: &Grid| candidate.iter().flatten().flatten().count();

        for (_, result) in legal_moves(&board) {
            assert!(
                count(&result) <= count(&board),
                "a slide may merge tiles away but never create them"
            );
        }
    }
}
