//! Core game state, configuration and the frame driver.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod game_state;

pub use config::{GameConfig, ObstacleMode, Viewport};
pub use game_loop::{run, FrameClock, InputSource, Renderer, SleepClock};
pub use game_state::{BirdView, Flow, Game, ObstacleView, RoundSummary, Screen, Snapshot};
