use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_value);
    let side = state.extent().cells_per_side();

    let line = Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("  Length: ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled("  Grid: ", label),
        Span::styled(format!("{side}x{side}"), value),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), hud_area);

    play_area
}
