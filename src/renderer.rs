use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, GLYPH_FOOD_CELL, GLYPH_SNAKE_CELL, GridExtent, Theme};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full game frame from immutable state.
///
/// The renderer has no write access to the engine: it reads the snake, the
/// food, the score and the status, and paints. Overlays are layered on top
/// for the non-playing states.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    if state.is_start_screen() {
        render_start_menu(frame, play_area, theme);
        return;
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(frame, play_area, state.score, theme),
        GameStatus::Victory => render_victory_menu(frame, play_area, state.score, theme),
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, state.extent(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD_CELL, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, state.extent(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else if Some(*segment) == tail {
            Style::new().fg(theme.snake_tail)
        } else {
            Style::new().fg(theme.snake_body)
        };

        buffer.set_string(x, y, GLYPH_SNAKE_CELL, style);
    }
}

/// Maps a logical cell to the terminal column/row of its left glyph.
///
/// Cells are two columns wide. Positions that do not fit inside `inner`
/// (a terminal shrunk after the session started) are skipped rather than
/// clipped into the border.
fn cell_to_terminal(inner: Rect, extent: GridExtent, position: Position) -> Option<(u16, u16)> {
    let side = i32::from(extent.cells_per_side());
    if position.x < 0 || position.y < 0 || position.x >= side || position.y >= side {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(2)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(1) >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
