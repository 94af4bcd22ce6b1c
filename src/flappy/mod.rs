//! The side-scrolling simulation.
//!
//! The player keeps a bird airborne by flapping against gravity and steers it
//! through the passages of pipe pairs scrolling in from the right. Passing a
//! pipe scores a point, and every point makes the passages narrower and the
//! pipes closer together. Hitting a pipe or the ground ends the round.

pub mod body;
pub mod collision;
pub mod difficulty;
pub mod logic;
pub mod obstacles;

pub use body::{Bird, ClampOutcome};
pub use collision::{check_collision, hits_obstacle};
pub use logic::{Round, RoundEnd, TickResult};
pub use obstacles::{Obstacle, ObstacleStream};
