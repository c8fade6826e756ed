use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::terminal;

use wrapsnake::config::{
    self, DEFAULT_TICK_INTERVAL_MS, FRAME_INTERVAL_MS, GridExtent, THEMES,
};
use wrapsnake::game::{GameState, GameStatus};
use wrapsnake::input::{GameInput, InputHandler};
use wrapsnake::renderer;
use wrapsnake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Fixed grid extent in cells per side (defaults to fitting the
    /// terminal; values below 5 are clamped up).
    #[arg(long)]
    extent: Option<u16>,

    /// Simulation tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for the food RNG, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&cli, &mut session)
}

/// Driver loop: owns timing policy and serializes every call into the
/// engine, so `tick` and `apply_input` never overlap.
fn run(cli: &Cli, session: &mut TerminalSession) -> io::Result<()> {
    let mut extent = initial_extent(cli)?;
    let mut state = new_session(cli, extent);
    state.status = GameStatus::Paused;

    let mut input = InputHandler::new();
    let tick_interval = Duration::from_millis(cli.tick_ms.max(1));
    let poll_timeout = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut theme_index = 0usize;
    let mut last_tick = Instant::now();
    // Resizes during play take effect at the next restart, not mid-session.
    let mut pending_extent = extent;

    loop {
        let theme = &THEMES[theme_index];
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        match input.poll_input(poll_timeout)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) => {
                if state.is_start_screen() {
                    state.status = GameStatus::Playing;
                    last_tick = Instant::now();
                } else if state.status.is_terminal() {
                    if cli.extent.is_none() && pending_extent != extent {
                        extent = pending_extent;
                        state = new_session(cli, extent);
                    } else {
                        state.reset();
                    }
                    state.status = GameStatus::Paused;
                }
            }
            Some(GameInput::CycleTheme) => {
                theme_index = (theme_index + 1) % THEMES.len();
            }
            Some(other) => state.apply_input(other),
            None => {}
        }

        if let Some((cols, rows)) = input.take_resize() {
            pending_extent = config::extent_for_viewport(cols, rows);
        }

        if state.status == GameStatus::Playing && last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn new_session(cli: &Cli, extent: GridExtent) -> GameState {
    match cli.seed {
        Some(seed) => GameState::new_with_seed(extent, seed),
        None => GameState::new(extent),
    }
}

fn initial_extent(cli: &Cli) -> io::Result<GridExtent> {
    if let Some(cells) = cli.extent {
        return Ok(GridExtent::new(cells));
    }

    let (cols, rows) = terminal::size()?;
    Ok(config::extent_for_viewport(cols, rows))
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
