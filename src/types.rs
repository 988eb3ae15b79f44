//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Active game screen.
    ///
    /// This variant represents the screen on which the board is displayed and the user slides
    /// tiles around.
    InGame,
    /// Terminal game-over screen.
    ///
    /// This variant represents the screen shown once no direction yields a legal move. It displays
    /// the final board together with a game-over banner before the application exits.
    GameOver,
}

/// Sliding directions for board moves.
///
/// This enumeration holds the four directions in which the tiles on the board can be slid. It is
/// used both to dispatch key presses and to key the precomputed legal-move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Slide all tiles toward the top row.
    Up,
    /// Slide all tiles toward the bottom row.
    Down,
    /// Slide all tiles toward the leftmost column.
    Left,
    /// Slide all tiles toward the rightmost column.
    Right,
}

impl Direction {
    /// All four sliding directions in a fixed order.
    ///
    /// This constant provides a stable iteration order for computing the legal-move list, so the
    /// list is deterministic for a given board.
    pub(crate) const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}
