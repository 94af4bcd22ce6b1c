//! Score-driven difficulty: passages shrink and obstacles bunch up as the
//! score grows, down to fixed floors.

use crate::core::config::GameConfig;

/// Vertical passage height for the given score.
pub fn gap(config: &GameConfig, score: u32) -> f64 {
    (config.initial_gap - config.gap_step * score as f64).max(config.min_gap)
}

/// Horizontal distance between consecutive obstacles for the given score.
pub fn spacing(config: &GameConfig, score: u32) -> f64 {
    (config.initial_spacing - config.spacing_step * score as f64).max(config.min_spacing)
}
