use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("WRAPSNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from("Borders wrap around."),
        Line::from("Only your own tail ends the game."),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Arrows/WASD or drag the mouse to steer"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, _theme: &Theme) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen with the final score.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, _theme: &Theme) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Your score: {score}")),
        Line::from("You ran into yourself."),
        Line::from(""),
        Line::from("[Enter]/[Space] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Draws the victory screen shown when the snake fills the whole grid.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, _theme: &Theme) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("YOU WON"),
        Line::from(""),
        Line::from(format!("Your score: {score}")),
        Line::from("The snake fills the entire grid."),
        Line::from(""),
        Line::from("[Enter]/[Space] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" victory ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
