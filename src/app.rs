//! Core application state and logic for the game.

use std::time::Instant;

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    board::{self, Grid},
    events, spawn,
    types::{Direction, Screen},
    ui,
};

/// Application state container for the game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game or the game-over display delay has elapsed, but it starts off
    /// `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Current game board.
    ///
    /// This field holds the 4x4 grid of tiles. It is replaced wholesale every turn by the
    /// precomputed result of the chosen move, followed by one random tile spawn.
    pub(crate) grid: Grid,
    /// Precomputed legal moves for the current board.
    ///
    /// This field caches, for each direction that changes the board, the grid that results from
    /// sliding in that direction. Key presses are checked against this list, so the board engine
    /// is never asked to evaluate an illegal direction; an empty list means game over.
    pub(crate) moves: Vec<(Direction, Grid)>,
    /// Timestamp of the moment the game ended.
    ///
    /// This field records when the board ran out of legal moves, so the game-over screen can be
    /// held on display for a short delay before the application exits on its own.
    pub(crate) game_over_at: Option<Instant>,
    /// Random number generator for tile spawning.
    ///
    /// This field holds the generator that picks spawn positions and tile values. It is seeded
    /// from the command line for reproducible games or from entropy otherwise.
    pub(crate) rng: StdRng,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

impl App {
    /// Creates a new instance of the App structure with a freshly seeded board.
    ///
    /// This function builds the starting state of a game: a grid seeded with two random tiles, the
    /// legal moves of that grid, and a generator either seeded with the given value for
    /// reproducible runs or drawn from operating system entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let grid = spawn::new_grid(&mut rng);
        let moves = board::legal_moves(&grid);

        Self {
            exit: false,
            screen: Screen::InGame,
            grid,
            moves,
            game_over_at: None,
            rng,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
