//! Event handling functions for user input and application state updates.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    board, spawn,
    types::{Direction, Screen},
    App,
};

/// Duration in milliseconds for which the game-over screen stays on display.
///
/// This constant controls how long the final board and the game-over banner remain visible before
/// the application exits on its own. The user can still quit immediately with 'q' during the
/// delay.
pub(crate) const GAME_OVER_DISPLAY_MS: u64 = 4000;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI, which also
/// drives the game-over display delay between key presses.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Up | KeyCode::Char('k') => handle_direction(app, Direction::Up),
                KeyCode::Down | KeyCode::Char('j') => handle_direction(app, Direction::Down),
                KeyCode::Left | KeyCode::Char('h') => handle_direction(app, Direction::Left),
                KeyCode::Right | KeyCode::Char('l') => handle_direction(app, Direction::Right),
                _ => {}
            }
        }
    }

    // Leave the final board on display for a short while, then exit on our own.
    if matches!(app.screen, Screen::GameOver) {
        if let Some(game_over_at) = app.game_over_at {
            if game_over_at.elapsed() >= Duration::from_millis(GAME_OVER_DISPLAY_MS) {
                app.exit = true;
            }
        }
    }

    Ok(())
}

/// Handles a directional key press by applying the move if it is legal.
///
/// This function looks the requested direction up in the precomputed legal-move list. A direction
/// that is not in the list leaves the board untouched, so the board engine is never asked to
/// evaluate an illegal move. A legal move replaces the grid with its precomputed result, spawns
/// one random tile, and recomputes the legal moves; if none remain, the game is over and the
/// game-over screen takes effect.
pub(crate) fn handle_direction(app: &mut App, direction: Direction) {
    if app.screen != Screen::InGame {
        return;
    }

    let Some(result) = app
        .moves
        .iter()
        .find(|&&(candidate, _)| candidate == direction)
        .map(|&(_, grid)| grid)
    else {
        return;
    };

    app.grid = result;
    spawn::fill_random(&mut app.grid, &mut app.rng);
    app.moves = board::legal_moves(&app.grid);

    if app.moves.is_empty() {
        app.screen = Screen::GameOver;
        app.game_over_at = Some(Instant::now());
    }
}
