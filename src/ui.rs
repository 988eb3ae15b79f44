//! User interface rendering functions for all application screens.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::{
    board::{Cell, Grid, GRID_SIZE},
    types::Screen,
    App,
};

/// Width of one rendered tile in terminal cells, borders included.
///
/// This constant sizes the bordered block each board position is drawn as. It leaves enough inner
/// room to print tile values of up to seven digits, which the board cannot outgrow in practice.
pub(crate) const TILE_WIDTH: u16 = 9;

/// Height of one rendered tile in terminal cells, borders included.
///
/// This constant leaves a single inner row for the centered tile value between the top and bottom
/// borders.
pub(crate) const TILE_HEIGHT: u16 = 3;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or layout retrieval failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::InGame => in_game(app, frame)?,
        Screen::GameOver => game_over(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the active game screen with the board and a key tooltip.
///
/// This function splits the frame into a board area and a bottom tooltip bar, draws the centered
/// board into the former, and labels the latter with the supported keys.
fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let board_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get board content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    render_board(&app.grid, frame, board_content_area)?;

    let board_width = TILE_WIDTH * u16::try_from(GRID_SIZE)?;

    // Center the tooltip horizontally like the board
    let tooltip_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(board_width),
        Constraint::Min(1),
    ])
    .split(tooltip_full_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered tooltip area from horizontal layout")?;

    let tooltip_block = Block::bordered()
        .title("(arrows / h j k l) slide / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Renders the game-over screen with the final board and a banner.
///
/// This function keeps the final board on display underneath a centered banner announcing that no
/// legal moves remain, so the user can inspect the losing position during the display delay.
#[expect(
    clippy::indexing_slicing,
    reason = "The collections are created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collections are created in-place with few, known elements; there is no risk of bad indexing."
)]
fn game_over(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let board_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get board content area from layout")?;

    render_board(&app.grid, frame, board_content_area)?;

    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(4)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title("Game Over")
        .title_bottom("(q) quit now")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(Clear, layout);
    frame.render_widget(block, layout);

    let inner_layout = Layout::vertical(vec![Constraint::Max(1); 2]).split(inner_space);

    frame.render_widget(
        Line::raw("GAME OVER")
            .centered()
            .style(Style::default().add_modifier(Modifier::BOLD)),
        inner_layout[0],
    );
    frame.render_widget(
        Line::raw("no direction changes the board").centered(),
        inner_layout[1],
    );

    Ok(())
}

/// Renders the 4x4 board centered within the given area.
///
/// This function centers the board both vertically and horizontally inside the area and draws each
/// cell as a bordered tile with its value, leaving empty cells as dimmed outlines.
fn render_board(grid: &Grid, frame: &mut Frame, area: Rect) -> Result<()> {
    let grid_side = u16::try_from(GRID_SIZE)?;
    let board_width = TILE_WIDTH * grid_side;
    let board_height = TILE_HEIGHT * grid_side;

    let vertical_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(board_height),
        Constraint::Min(1),
    ])
    .split(area);

    let board_rows_area = vertical_layout
        .get(1)
        .ok_or_eyre("failed to get board area from vertical layout")?;

    let board_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(board_width),
        Constraint::Min(1),
    ])
    .split(*board_rows_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board area from horizontal layout")?;

    let row_areas =
        Layout::vertical([Constraint::Length(TILE_HEIGHT); GRID_SIZE]).split(board_area);

    for (row_area, row) in row_areas.iter().zip(grid.iter()) {
        let cell_areas =
            Layout::horizontal([Constraint::Length(TILE_WIDTH); GRID_SIZE]).split(*row_area);

        for (cell_area, cell) in cell_areas.iter().zip(row.iter()) {
            render_tile(frame, *cell_area, *cell);
        }
    }

    Ok(())
}

/// Renders a single tile as a bordered block with its centered value.
///
/// This function draws occupied cells in the color matching their value and empty cells as dimmed
/// outlines without content.
fn render_tile(frame: &mut Frame, area: Rect, cell: Cell) {
    let style = match cell {
        Some(value) => Style::default().fg(tile_color(value)),
        None => Style::default().fg(Color::DarkGray),
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(style);
    let inner_space = block.inner(area);

    frame.render_widget(block, area);

    if let Some(value) = cell {
        frame.render_widget(Line::raw(value.to_string()).centered(), inner_space);
    }
}

/// Returns the display color for a tile value.
///
/// This function keys the tile palette on the value so the board reads at a glance; values beyond
/// 1024 share the final color.
const fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::White,
        4 => Color::LightYellow,
        8 => Color::Yellow,
        16 => Color::LightMagenta,
        32 => Color::Magenta,
        64 => Color::LightRed,
        128 => Color::Red,
        256 => Color::LightCyan,
        512 => Color::Cyan,
        1024 => Color::LightGreen,
        _ => Color::Green,
    }
}
