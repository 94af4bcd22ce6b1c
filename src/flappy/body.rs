//! The bird: vertical position and velocity under gravity and flaps.

use crate::core::config::GameConfig;

/// Result of clamping the bird to the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampOutcome {
    /// Bird is inside the field, nothing happened.
    Free,
    /// Bird touched the ceiling and was held there. Not fatal.
    Ceiling,
    /// Bird hit the ground. Ends the round.
    Ground,
}

/// The player-controlled body. `x` is fixed; the world scrolls past it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Center y (grows downward).
    pub y: f64,
    /// Vertical velocity in units per tick (positive = downward).
    pub velocity: f64,
    pub radius: f64,
    /// Wing sprite frame; alternates every tick, forced up on a flap.
    pub wings_up: bool,
}

impl Bird {
    /// Spawn a bird at rest in the vertical middle of the viewport.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.viewport.height / 2.0,
            velocity: 0.0,
            radius: config.bird_radius,
            wings_up: false,
        }
    }

    pub fn apply_gravity(&mut self, config: &GameConfig) {
        self.velocity += config.gravity;
    }

    /// Overwrite velocity with the jump strength. Not additive.
    pub fn impulse(&mut self, config: &GameConfig) {
        self.velocity = config.jump_strength;
        self.wings_up = true;
    }

    pub fn integrate(&mut self) {
        self.y += self.velocity;
    }

    /// Hold the bird between ceiling and floor, zeroing velocity on contact.
    pub fn clamp(&mut self, config: &GameConfig) -> ClampOutcome {
        let floor_y = config.floor_y();
        let ceiling_y = config.ceiling_y();

        if self.y >= floor_y {
            self.y = floor_y;
            self.velocity = 0.0;
            return ClampOutcome::Ground;
        }
        if self.y <= ceiling_y {
            self.y = ceiling_y;
            self.velocity = 0.0;
            return ClampOutcome::Ceiling;
        }
        ClampOutcome::Free
    }

    /// One physics step: impulse (if flapped) → gravity → integrate → clamp.
    pub fn step(&mut self, config: &GameConfig, flapped: bool) -> ClampOutcome {
        if flapped {
            self.impulse(config);
        } else {
            self.wings_up = !self.wings_up;
        }
        self.apply_gravity(config);
        self.integrate();
        self.clamp(config)
    }
}
