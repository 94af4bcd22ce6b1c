//! Flappy - terminal side-scrolling reflex game
//!
//! This module exposes the simulation and its collaborators for testing and
//! for the binary front-end.

pub mod best_score;
pub mod core;
pub mod flappy;
pub mod input;
pub mod ui;
pub mod utils;

pub use best_score::{BestScoreStore, BestScoreTracker, FileStore, MemoryStore};
pub use self::core::{GameConfig, ObstacleMode, Viewport};
pub use self::core::{Flow, Game, RoundSummary, Screen, Snapshot};
pub use flappy::{Round, RoundEnd};
pub use input::GameInput;
