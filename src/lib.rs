//! Wrap-around Snake for the terminal.
//!
//! The simulation engine lives in [`game`], [`snake`], and [`food`] and is
//! fully decoupled from the terminal: it advances one [`game::GameState::tick`]
//! at a time and exposes read-only state to the renderer. Everything that
//! touches the terminal sits in [`renderer`], [`ui`], [`input`], and
//! [`terminal_runtime`]; the binary's driver loop owns timing policy.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
