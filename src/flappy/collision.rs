//! Bird-versus-pipe collision test.

use super::body::Bird;
use super::obstacles::{Obstacle, ObstacleStream};
use crate::core::config::GameConfig;

/// Whether the bird touches either pipe of `obstacle` at the given score.
pub fn hits_obstacle(config: &GameConfig, bird: &Bird, obstacle: &Obstacle, score: u32) -> bool {
    let horizontal_overlap = bird.x + bird.radius > obstacle.x
        && bird.x - bird.radius < obstacle.x + config.obstacle_width;
    if !horizontal_overlap {
        return false;
    }

    bird.y - bird.radius < obstacle.reference_y
        || bird.y + bird.radius > obstacle.passage_bottom(config, score)
}

/// Check every obstacle in the stream, not just the nearest one.
pub fn check_collision(config: &GameConfig, bird: &Bird, stream: &ObstacleStream, score: u32) -> bool {
    stream
        .iter()
        .any(|obstacle| hits_obstacle(config, bird, obstacle, score))
}
