//! Skyward - a terminal bird-and-pipe arcade game.
//!
//! The [`game`] module holds the pure simulation: gravity, pipe scrolling
//! and recycling, collision detection, and scoring, all on a fixed 10ms
//! tick. Platform concerns live in thin adapters around it: [`ui`] renders
//! the world with ratatui, [`input`] maps key events, and [`sound`] plays
//! event sounds. The binary owns the loop and the tick timer.

// Allow dead code in library - some helpers are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod game;
pub mod input;
pub mod settings;
pub mod sound;
pub mod sprites;
pub mod ui;

// Re-export commonly used types for convenience
pub use constants::TICK_INTERVAL_MS;
pub use game::{GameEvent, GameInput, GameWorld};
pub use settings::Settings;
