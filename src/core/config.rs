//! Game tuning, built once at startup and passed by reference everywhere.
//!
//! Defaults reproduce the classic feel. An optional `~/.flappy/config.json`
//! may override any subset of fields; missing or unreadable files fall back
//! to the defaults.

use super::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};

/// Fixed play-field dimensions in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Whether new obstacles may drift vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleMode {
    /// Each obstacle has a coin-flip chance of oscillating.
    #[default]
    Oscillating,
    /// Obstacles never move vertically.
    Static,
}

/// All tunables of a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: Viewport,

    pub bird_x: f64,
    pub bird_radius: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward).
    pub jump_strength: f64,

    pub obstacle_count: usize,
    pub obstacle_speed: f64,
    pub obstacle_width: f64,
    pub obstacle_mode: ObstacleMode,
    pub oscillation_chance: f64,
    pub oscillation_step: i32,
    pub reference_min: i32,
    pub reference_max: i32,

    pub initial_gap: f64,
    pub min_gap: f64,
    pub gap_step: f64,
    pub initial_spacing: f64,
    pub min_spacing: f64,
    pub spacing_step: f64,

    pub scenery_speed: f64,
    pub scenery_tile_width: f64,

    pub frame_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_mode: ObstacleMode::default(),
            oscillation_chance: OSCILLATION_CHANCE,
            oscillation_step: OSCILLATION_STEP,
            reference_min: REFERENCE_HEIGHT_MIN,
            reference_max: REFERENCE_HEIGHT_MAX,
            initial_gap: INITIAL_GAP,
            min_gap: MIN_GAP,
            gap_step: GAP_STEP,
            initial_spacing: INITIAL_SPACING,
            min_spacing: MIN_SPACING,
            spacing_step: SPACING_STEP,
            scenery_speed: SCENERY_SPEED,
            scenery_tile_width: SCENERY_TILE_WIDTH,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Load `config.json` from the data directory, falling back to defaults.
    pub fn load() -> Self {
        let loaded: GameConfig = load_json_or_default(CONFIG_FILE);
        let config = loaded.clone().sanitized();
        if config != loaded {
            log::warn!("config.json contained inconsistent values; some were reset");
        }
        config
    }

    /// Repair values that would break the simulation invariants.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            self.viewport = defaults.viewport;
        }
        if !(self.bird_radius > 0.0) || self.bird_radius * 2.0 >= self.viewport.height {
            self.bird_radius = defaults.bird_radius.min(self.viewport.height / 4.0);
        }
        if !(self.obstacle_width > 0.0) {
            self.obstacle_width = defaults.obstacle_width;
        }
        if self.obstacle_count == 0 {
            self.obstacle_count = defaults.obstacle_count;
        }
        if !(self.obstacle_speed > 0.0) {
            self.obstacle_speed = defaults.obstacle_speed;
        }
        if self.reference_min > self.reference_max {
            std::mem::swap(&mut self.reference_min, &mut self.reference_max);
        }
        if !(0.0..=1.0).contains(&self.oscillation_chance) {
            self.oscillation_chance = defaults.oscillation_chance;
        }
        self.oscillation_step = self.oscillation_step.abs();
        if self.min_gap > self.initial_gap {
            self.min_gap = self.initial_gap;
        }
        if self.gap_step < 0.0 {
            self.gap_step = 0.0;
        }
        // Obstacles must cross the left edge one at a time.
        if self.min_spacing < self.obstacle_width {
            self.min_spacing = self.obstacle_width;
        }
        if self.initial_spacing < self.min_spacing {
            self.initial_spacing = self.min_spacing;
        }
        if self.spacing_step < 0.0 {
            self.spacing_step = 0.0;
        }
        if !(self.scenery_tile_width > 0.0) {
            self.scenery_tile_width = defaults.scenery_tile_width;
        }
        self
    }

    /// Lowest y the bird's center may reach.
    pub fn floor_y(&self) -> f64 {
        self.viewport.height - self.bird_radius
    }

    /// Highest point (smallest y) the bird's center may reach.
    pub fn ceiling_y(&self) -> f64 {
        self.bird_radius
    }
}
