use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell offset for this direction.
    ///
    /// Screen convention: y grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    CycleTheme,
    Quit,
    Confirm,
}

/// Decodes a drag/swipe displacement into a direction.
///
/// The axis with the larger absolute displacement wins; an exact tie counts
/// as horizontal. A zero displacement carries no intent and yields `None`.
#[must_use]
pub fn direction_from_swipe(diff_x: i32, diff_y: i32) -> Option<Direction> {
    if diff_x == 0 && diff_y == 0 {
        return None;
    }

    let direction = if diff_y.abs() > diff_x.abs() {
        if diff_y > 0 { Direction::Down } else { Direction::Up }
    } else if diff_x >= 0 {
        Direction::Right
    } else {
        Direction::Left
    };

    Some(direction)
}

/// Translates raw crossterm events into [`GameInput`] values.
///
/// Keyboard: arrows and WASD steer, `p` pauses, `t` cycles themes, `q` and
/// `Esc` quit, `Enter`/`Space` confirm. Mouse: a press-drag-release gesture
/// is decoded as a swipe via [`direction_from_swipe`].
#[derive(Debug, Default)]
pub struct InputHandler {
    swipe_origin: Option<(u16, u16)>,
    last_resize: Option<(u16, u16)>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls for one pending input event without blocking the game loop.
    ///
    /// Returns `Ok(None)` when no event is ready or the event carries no
    /// game meaning (releases, irrelevant keys). Resize events are recorded
    /// and handed out through [`Self::take_resize`].
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(decode_key(key)),
            Event::Mouse(mouse) => Ok(self.decode_mouse(mouse)),
            Event::Resize(cols, rows) => {
                self.last_resize = Some((cols, rows));
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Returns the most recent viewport size seen since the last call.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.last_resize.take()
    }

    fn decode_mouse(&mut self, mouse: MouseEvent) -> Option<GameInput> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe_origin = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (start_x, start_y) = self.swipe_origin.take()?;
                let diff_x = i32::from(mouse.column) - i32::from(start_x);
                let diff_y = i32::from(mouse.row) - i32::from(start_y);
                direction_from_swipe(diff_x, diff_y).map(GameInput::Direction)
            }
            _ => None,
        }
    }
}

fn decode_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p') => Some(GameInput::Pause),
        KeyCode::Char('t') => Some(GameInput::CycleTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        _ => None,
    }
}
