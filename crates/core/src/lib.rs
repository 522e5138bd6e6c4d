//! Core engine - pure, deterministic, and testable
//!
//! This crate contains the rules, state machine and timing of the falling-block game.
//! It has **no** dependencies on rendering, audio, networking or I/O:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Tick-driven**: the host calls [`Game::update`] once per frame with the elapsed seconds
//! - **Command based**: input maps onto methods that return whether they took effect
//! - **Event feed**: locks, clears and game over are queued for the host to drain
//!
//! # Module Structure
//!
//! - [`grid`]: playfield storage, collision and line clearing
//! - [`pieces`]: shape catalog, colors, spawn columns and the `Piece` value
//! - [`kicks`]: SRS wall-kick tables and kick resolution
//! - [`rng`]: 7-bag randomizer over a seedable LCG
//! - [`scoring`]: line-clear awards, combo, back-to-back, perfect clear, gravity curve
//! - [`events`]: the event feed
//! - [`config`]: construction parameters and their validation
//! - [`game`]: the orchestrator
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, GameConfig, GameEvent};
//! use blockfall_core::types::Phase;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
//! game.start_game();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.move_right();
//! game.rotate_clockwise();
//! assert!(game.hard_drop());
//!
//! assert!(game.score() > 0); // hard drop awards points
//! assert_eq!(game.pop_events().first(), Some(&GameEvent::PieceLocked));
//! ```

pub mod config;
pub mod events;
pub mod game;
pub mod grid;
pub mod kicks;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use events::{EventQueue, GameEvent};
pub use game::Game;
pub use grid::Grid;
pub use kicks::{kick_candidates, try_rotate};
pub use pieces::{color_of, get_shape, spawn_offset, Piece, PieceShape};
pub use rng::{Bag, SimpleRng};
pub use scoring::{drop_interval, ScoringState};
pub use snapshot::{GameSnapshot, TimersSnapshot};
