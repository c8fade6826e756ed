use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridExtent;
use crate::food::{Food, SpawnError};
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    /// Returns true for states that end the session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Outcome of a single simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult {
    /// The snake moved one cell; nothing else happened.
    Continued,
    /// The new head landed on the food: score and length grew by one.
    AteFood,
    /// The new head hit the body (or the session was already over).
    GameOver,
}

/// Complete mutable game state for one session.
///
/// The engine exclusively owns every gameplay variable; the renderer reads
/// it through `&GameState` and the input adapter only reaches it through
/// [`GameState::apply_input`]. All randomness flows through the injected
/// RNG, so a seeded state replays identically.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    extent: GridExtent,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with entropy-seeded randomness.
    #[must_use]
    pub fn new(extent: GridExtent) -> Self {
        Self::with_rng(extent, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(extent: GridExtent, seed: u64) -> Self {
        Self::with_rng(extent, StdRng::seed_from_u64(seed))
    }

    fn with_rng(extent: GridExtent, mut rng: StdRng) -> Self {
        let snake = starting_snake(extent);
        let food = Food::spawn(&mut rng, extent, &snake)
            .expect("a clamped grid always has a free cell for the first food");

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Playing,
            tick_count: 0,
            extent,
            rng,
        }
    }

    /// Re-initializes the session in place, discarding all prior state.
    ///
    /// Idempotent: two consecutive resets differ only in the food's random
    /// position. The RNG stream carries over; everything else starts fresh.
    pub fn reset(&mut self) {
        self.snake = starting_snake(self.extent);
        self.food = Food::spawn(&mut self.rng, self.extent, &self.snake)
            .expect("a clamped grid always has a free cell for the first food");
        self.score = 0;
        self.status = GameStatus::Playing;
        self.tick_count = 0;
    }

    /// Advances the simulation by one step.
    ///
    /// The order is load-bearing: direction commit, wrap, collision check
    /// against the pre-insertion body, insert, food check. On collision the
    /// candidate head is *not* inserted, so the body and score freeze in
    /// their last live shape.
    pub fn tick(&mut self) -> TickResult {
        match self.status {
            GameStatus::Paused => return TickResult::Continued,
            GameStatus::GameOver | GameStatus::Victory => return TickResult::GameOver,
            GameStatus::Playing => {}
        }

        self.tick_count += 1;

        let direction = self.snake.commit_pending_direction();
        let candidate = self.snake.head().stepped(direction).wrapped(self.extent);

        if self.snake.occupies(candidate) {
            self.status = GameStatus::GameOver;
            return TickResult::GameOver;
        }

        self.snake.push_head(candidate);

        if candidate == self.food.position {
            self.score += 1;

            if self.snake.len() == self.extent.total_cells() {
                self.status = GameStatus::Victory;
                return TickResult::AteFood;
            }

            match Food::spawn(&mut self.rng, self.extent, &self.snake) {
                Ok(food) => self.food = food,
                // Unreachable once the length check above holds, but the
                // exhausted grid must stay a terminal state, never a loop.
                Err(SpawnError::ExhaustedGrid { .. }) => self.status = GameStatus::Victory,
            }

            return TickResult::AteFood;
        }

        self.snake.pop_tail();
        TickResult::Continued
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Quit | GameInput::Confirm | GameInput::CycleTheme => {}
        }
    }

    /// Returns the grid extent this session plays on.
    #[must_use]
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Returns true while the initial pause screen should show.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }
}

/// One segment at the grid center, heading right.
fn starting_snake(extent: GridExtent) -> Snake {
    let center = i32::from(extent.cells_per_side() / 2);
    Snake::new(Position { x: center, y: center }, Direction::Right)
}

#[cfg(test)]
mod tests {
    use crate::config::GridExtent;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus, TickResult};

    fn extent(cells: u16) -> GridExtent {
        GridExtent::new(cells)
    }

    #[test]
    fn tick_moves_the_head_one_cell() {
        let mut state = GameState::new_with_seed(extent(20), 1);
        state.snake = Snake::new(Position { x: 10, y: 10 }, Direction::Right);
        state.food = Food::new(Position { x: 0, y: 0 });

        assert_eq!(state.tick(), TickResult::Continued);
        assert_eq!(state.snake.head(), Position { x: 11, y: 10 });
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn head_wraps_at_the_border_instead_of_dying() {
        let mut state = GameState::new_with_seed(extent(20), 2);
        state.snake = Snake::new(Position { x: 19, y: 10 }, Direction::Right);
        state.food = Food::new(Position { x: 5, y: 5 });

        assert_eq!(state.tick(), TickResult::Continued);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head(), Position { x: 0, y: 10 });
    }

    #[test]
    fn head_wraps_on_negative_coordinates() {
        let mut state = GameState::new_with_seed(extent(20), 2);
        state.snake = Snake::new(Position { x: 3, y: 0 }, Direction::Up);
        state.food = Food::new(Position { x: 5, y: 5 });

        assert_eq!(state.tick(), TickResult::Continued);
        assert_eq!(state.snake.head(), Position { x: 3, y: 19 });
    }

    #[test]
    fn self_collision_freezes_the_pre_tick_body() {
        let mut state = GameState::new_with_seed(extent(20), 3);
        // Head at (5,5) moving Down into (5,6), which the tail occupies.
        state.snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 6, y: 5 },
                Position { x: 6, y: 6 },
                Position { x: 5, y: 6 },
            ],
            Direction::Down,
        );
        state.food = Food::new(Position { x: 0, y: 0 });
        state.score = 3;

        assert_eq!(state.tick(), TickResult::GameOver);
        assert_eq!(state.status, GameStatus::GameOver);
        // The colliding head was never inserted.
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.score, 3);
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut state = GameState::new_with_seed(extent(20), 4);
        state.snake = Snake::new(Position { x: 3, y: 3 }, Direction::Right);
        state.food = Food::new(Position { x: 4, y: 3 });

        assert_eq!(state.tick(), TickResult::AteFood);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
        // The replacement food landed on a free cell.
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn reversal_request_does_not_turn_the_snake() {
        let mut state = GameState::new_with_seed(extent(20), 5);
        state.snake = Snake::new(Position { x: 10, y: 10 }, Direction::Right);
        state.food = Food::new(Position { x: 0, y: 0 });

        state.apply_input(GameInput::Direction(Direction::Right));
        state.apply_input(GameInput::Direction(Direction::Left));
        state.tick();

        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.head(), Position { x: 11, y: 10 });
    }

    #[test]
    fn tick_after_game_over_is_a_no_op() {
        let mut state = GameState::new_with_seed(extent(20), 6);
        state.status = GameStatus::GameOver;
        let snapshot_len = state.snake.len();
        let snapshot_head = state.snake.head();

        assert_eq!(state.tick(), TickResult::GameOver);
        assert_eq!(state.snake.len(), snapshot_len);
        assert_eq!(state.snake.head(), snapshot_head);
    }

    #[test]
    fn tick_while_paused_moves_nothing() {
        let mut state = GameState::new_with_seed(extent(20), 6);
        state.apply_input(GameInput::Pause);
        let head = state.snake.head();

        assert_eq!(state.tick(), TickResult::Continued);
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn reset_is_idempotent_up_to_food_position() {
        let mut state = GameState::new_with_seed(extent(11), 7);
        state.tick();
        state.tick();
        state.apply_input(GameInput::Direction(Direction::Down));
        state.tick();
        state.score = 9;
        state.status = GameStatus::GameOver;

        state.reset();
        let first = state.clone();
        state.reset();

        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.tick_count, 0);

        assert_eq!(first.snake.head(), state.snake.head());
        assert_eq!(first.score, state.score);
        assert_eq!(first.status, state.status);
    }

    #[test]
    fn filling_the_grid_is_a_victory() {
        let mut state = GameState::new_with_seed(extent(5), 8);
        // Boustrophedon body covering all but the top-left cell, head
        // adjacent to it and moving in.
        let mut segments = Vec::new();
        for y in 0..5 {
            let xs: Vec<i32> = if y % 2 == 0 {
                (0..5).collect()
            } else {
                (0..5).rev().collect()
            };
            for x in xs {
                segments.push(Position { x, y });
            }
        }
        // Head is the cell after (0,0) in the path; drop (0,0) and face it.
        segments.remove(0);
        state.snake = Snake::from_segments(segments, Direction::Left);
        state.food = Food::new(Position { x: 0, y: 0 });

        assert_eq!(state.tick(), TickResult::AteFood);
        assert_eq!(state.status, GameStatus::Victory);
        assert_eq!(state.snake.len(), 25);
    }

    #[test]
    fn direction_input_is_ignored_after_game_over() {
        let mut state = GameState::new_with_seed(extent(20), 9);
        state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
        state.status = GameStatus::GameOver;

        state.apply_input(GameInput::Direction(Direction::Down));

        assert_eq!(state.snake.pending_direction(), Direction::Right);
    }
}
