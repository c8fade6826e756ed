use rand::Rng;
use thiserror::Error;

use crate::config::GridExtent;
use crate::snake::{Position, Snake};

/// Food placement failure.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SpawnError {
    /// The snake occupies every cell, so no food can be placed. The engine
    /// treats this as the session's win condition.
    #[error("no free cell left on the {extent}x{extent} grid")]
    ExhaustedGrid { extent: u16 },
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns a food in a uniformly chosen unoccupied cell.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        extent: GridExtent,
        snake: &Snake,
    ) -> Result<Self, SpawnError> {
        spawn_position(rng, extent, snake).map(Self::new)
    }
}

/// Picks a free cell uniformly at random.
///
/// Enumerating the free cells and indexing into them gives the same
/// distribution as resampling until a free cell comes up, but it always
/// terminates and turns the full-grid case into an explicit error instead of
/// an endless loop.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    extent: GridExtent,
    snake: &Snake,
) -> Result<Position, SpawnError> {
    let side = i32::from(extent.cells_per_side());
    let mut candidates = Vec::with_capacity(extent.total_cells().saturating_sub(snake.len()));

    for y in 0..side {
        for x in 0..side {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(SpawnError::ExhaustedGrid {
            extent: extent.cells_per_side(),
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
