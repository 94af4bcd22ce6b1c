//! The obstacle stream: a fixed-length queue of pipe pairs scrolling left.

use super::difficulty;
use crate::core::config::{GameConfig, ObstacleMode};
use rand::Rng;
use std::collections::VecDeque;

/// A top/bottom pipe pair. The passage spans
/// `reference_y .. reference_y + gap(score)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    /// Bottom of the upper pipe / top of the passage.
    pub reference_y: f64,
    /// Drifts vertically by a small random step every tick.
    pub is_oscillating: bool,
}

impl Obstacle {
    /// Create an obstacle at `x` with a random reference height and flag.
    pub fn spawn<R: Rng>(config: &GameConfig, x: f64, rng: &mut R) -> Self {
        let reference_y = rng.gen_range(config.reference_min..=config.reference_max) as f64;
        let is_oscillating = match config.obstacle_mode {
            ObstacleMode::Oscillating => rng.gen_bool(config.oscillation_chance),
            ObstacleMode::Static => false,
        };
        Self {
            x,
            reference_y,
            is_oscillating,
        }
    }

    pub fn right_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.obstacle_width
    }

    /// Bottom of the passage for the given score.
    pub fn passage_bottom(&self, config: &GameConfig, score: u32) -> f64 {
        self.reference_y + difficulty::gap(config, score)
    }
}

/// Ordered oldest-first; the head is the obstacle closest to the bird.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleStream {
    /// Line up `config.obstacle_count` obstacles just past the right edge.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let obstacles = (0..config.obstacle_count)
            .map(|i| {
                let x = config.viewport.width + i as f64 * config.initial_spacing;
                Obstacle::spawn(config, x, rng)
            })
            .collect();
        Self { obstacles }
    }

    /// Build a stream from explicit obstacles. Used to set up exact scenarios.
    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles: obstacles.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn head(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn tail(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    /// Scroll every obstacle left by `speed`.
    pub fn advance(&mut self, speed: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Nudge each oscillating obstacle by -step, 0 or +step, kept in range.
    pub fn oscillate<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let step = config.oscillation_step;
        let min = config.reference_min as f64;
        let max = config.reference_max as f64;
        for obstacle in self.obstacles.iter_mut().filter(|o| o.is_oscillating) {
            let delta = rng.gen_range(-1..=1) * step;
            obstacle.reference_y = (obstacle.reference_y + delta as f64).clamp(min, max);
        }
    }

    /// Replace the head once it has fully left the viewport.
    ///
    /// `score` is the score before this recycle. Returns `true` when an
    /// obstacle was replaced, in which case the caller must add one point;
    /// the new obstacle is already spaced for `score + 1`.
    pub fn recycle<R: Rng>(&mut self, config: &GameConfig, score: u32, rng: &mut R) -> bool {
        let passed = self
            .head()
            .is_some_and(|head| head.right_edge(config) < 0.0);
        if !passed {
            return false;
        }

        self.obstacles.pop_front();
        let new_score = score.saturating_add(1);
        let spacing = difficulty::spacing(config, new_score);
        let x = match self.tail() {
            Some(tail) => tail.x + spacing,
            None => config.viewport.width,
        };
        self.obstacles.push_back(Obstacle::spawn(config, x, rng));
        log::debug!(
            "Obstacle recycled at score {}, next spawn x={:.1} spacing={:.1}",
            new_score,
            x,
            spacing
        );
        true
    }
}
