use std::collections::VecDeque;

use crate::config::GridExtent;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring position one cell over in `direction`,
    /// before any wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position wrapped into `[0, extent)` on both axes.
    ///
    /// Handles coordinates that have gone negative or one past the edge, so
    /// leaving the grid on any side re-enters from the opposite side.
    #[must_use]
    pub fn wrapped(self, extent: GridExtent) -> Self {
        let side = i32::from(extent.cells_per_side());
        Self {
            x: wrap_axis(self.x, side),
            y: wrap_axis(self.y, side),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Mutable snake body plus the current and pending movement direction.
///
/// The pending direction is the one the next tick will travel in. Intent
/// calls between ticks overwrite it (last accepted request wins); a request
/// that exactly reverses the *current* direction is dropped silently, since
/// honoring it would drive the head straight into the segment behind it.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` facing `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Requests a direction change for the next tick.
    ///
    /// Silently ignored when `requested` is anti-parallel to the current
    /// direction; otherwise it replaces whatever was pending.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.pending_direction = requested;
    }

    /// Promotes the pending direction to the current one and returns it.
    ///
    /// Called exactly once at the start of every tick, before the candidate
    /// head is computed.
    pub fn commit_pending_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }

    /// Inserts a new head at the front of the body.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes the tail segment. The engine never pops the last remaining
    /// segment: a head is always pushed first on a non-colliding tick.
    pub fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true for a snake built
    /// through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next tick will travel in.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridExtent;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_extent() {
        let extent = GridExtent::new(10);

        assert_eq!(
            Position { x: -1, y: 3 }.wrapped(extent),
            Position { x: 9, y: 3 }
        );
        assert_eq!(
            Position { x: 4, y: 10 }.wrapped(extent),
            Position { x: 4, y: 0 }
        );
        assert_eq!(
            Position { x: 10, y: -1 }.wrapped(extent),
            Position { x: 0, y: 9 }
        );
    }

    #[test]
    fn stepped_moves_one_cell() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.stepped(Direction::Right), Position { x: 6, y: 5 });
        assert_eq!(origin.stepped(Direction::Up), Position { x: 5, y: 4 });
    }

    #[test]
    fn reversal_request_is_silently_dropped() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.set_direction(Direction::Left);

        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn latest_accepted_request_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Down);

        assert_eq!(snake.pending_direction(), Direction::Down);
        assert_eq!(snake.commit_pending_direction(), Direction::Down);
    }

    #[test]
    fn reversal_is_checked_against_current_not_pending() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        // Up is pending, but Left still reverses the *current* Right.
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);

        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn occupies_reports_every_segment() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
            ],
            Direction::Right,
        );

        assert!(snake.occupies(Position { x: 1, y: 3 }));
        assert!(!snake.occupies(Position { x: 3, y: 2 }));
        assert_eq!(snake.len(), 3);
    }
}
