use ratatui::style::Color;
use ratatui::symbols::border;

/// Cells per side of the square play field, passed through the game as a
/// named type.
///
/// The extent is derived from the viewport by the host, but the engine only
/// ever sees a value that has already been floor-clamped: anything below
/// [`GridExtent::MIN`] is bumped up at construction rather than rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridExtent(u16);

impl GridExtent {
    /// Smallest playable grid. Below this the snake has nowhere to turn.
    pub const MIN: u16 = 5;

    /// Creates an extent, clamping undersized values up to [`Self::MIN`].
    #[must_use]
    pub fn new(cells_per_side: u16) -> Self {
        Self(cells_per_side.max(Self::MIN))
    }

    /// Returns the number of cells along one side.
    #[must_use]
    pub fn cells_per_side(self) -> u16 {
        self.0
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }
}

/// Derives the grid extent from the terminal viewport.
///
/// One logical cell is two columns wide and one row tall, which makes cells
/// roughly square in most terminal fonts. The border eats two columns and two
/// rows, the HUD one more row. The result is floor-clamped by
/// [`GridExtent::new`], so even a tiny terminal yields a playable grid.
#[must_use]
pub fn extent_for_viewport(cols: u16, rows: u16) -> GridExtent {
    let fit_x = cols.saturating_sub(2) / 2;
    let fit_y = rows.saturating_sub(3);
    GridExtent::new(fit_x.min(fit_y))
}

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_value: Color,
    pub hud_label: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_value: Color::White,
    hud_label: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_value: Color::Cyan,
    hud_label: Color::DarkGray,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN];

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph pair for one snake cell (a cell is two columns wide).
pub const GLYPH_SNAKE_CELL: &str = "██";

/// Glyph pair for the food cell.
pub const GLYPH_FOOD_CELL: &str = "◖◗";

/// Tick interval in milliseconds. Fixed for the whole session; this game
/// does not speed up with score.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// How long the driver sleeps between input polls.
pub const FRAME_INTERVAL_MS: u64 = 16;
