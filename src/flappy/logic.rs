//! One round of play and its per-tick pipeline.

use super::body::{Bird, ClampOutcome};
use super::collision::check_collision;
use super::obstacles::ObstacleStream;
use crate::core::config::GameConfig;
use rand::Rng;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The bird hit the ground.
    Ground,
    /// The bird hit a pipe.
    Obstacle,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// An obstacle was passed and the score went up by one.
    pub scored: bool,
    /// Set when the round is over.
    pub ended: Option<RoundEnd>,
}

/// All state of a round in progress. Dropped when the round ends.
#[derive(Debug, Clone)]
pub struct Round {
    pub bird: Bird,
    pub obstacles: ObstacleStream,
    pub score: u32,
    /// Horizontal offset of the scrolling ground, in `(-tile_width, 0]`.
    pub scenery_offset: f64,
    pub tick_count: u64,
}

impl Round {
    /// Fresh round: bird mid-screen at rest, new obstacles, score zero.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            bird: Bird::new(config),
            obstacles: ObstacleStream::new(config, rng),
            score: 0,
            scenery_offset: 0.0,
            tick_count: 0,
        }
    }

    /// Advance the round by one tick.
    ///
    /// Order: bird physics → obstacle advance → oscillate → recycle/score →
    /// collision against the current score's gap. A ground hit still lets the
    /// rest of the tick run so the final frame is consistent.
    pub fn tick<R: Rng>(&mut self, config: &GameConfig, flapped: bool, rng: &mut R) -> TickResult {
        self.tick_count += 1;
        self.scroll_scenery(config);

        let ground_hit = self.bird.step(config, flapped) == ClampOutcome::Ground;

        self.obstacles.advance(config.obstacle_speed);
        self.obstacles.oscillate(config, rng);
        let scored = self.obstacles.recycle(config, self.score, rng);
        if scored {
            self.score += 1;
        }

        let ended = if ground_hit {
            Some(RoundEnd::Ground)
        } else if check_collision(config, &self.bird, &self.obstacles, self.score) {
            Some(RoundEnd::Obstacle)
        } else {
            None
        };

        TickResult { scored, ended }
    }

    fn scroll_scenery(&mut self, config: &GameConfig) {
        self.scenery_offset -= config.scenery_speed;
        if self.scenery_offset <= -config.scenery_tile_width {
            self.scenery_offset = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ObstacleMode;
    use crate::flappy::obstacles::Obstacle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn open_pipe(x: f64) -> Obstacle {
        Obstacle {
            x,
            reference_y: 250.0,
            is_oscillating: false,
        }
    }

    #[test]
    fn test_new_round_defaults() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let round = Round::new(&config, &mut rng);
        assert_eq!(round.score, 0);
        assert_eq!(round.bird.y, 350.0);
        assert_eq!(round.bird.velocity, 0.0);
        assert_eq!(round.obstacles.len(), 3);
        assert_eq!(round.tick_count, 0);
    }

    #[test]
    fn test_first_tick_without_flap() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = Round::new(&config, &mut rng);
        let result = round.tick(&config, false, &mut rng);
        assert_eq!(result, TickResult::default());
        assert_eq!(round.bird.velocity, 0.5);
        assert_eq!(round.bird.y, 350.5);
        assert_eq!(round.obstacles.head().unwrap().x, 495.0);
        assert_eq!(round.scenery_offset, -2.0);
    }

    #[test]
    fn test_recycle_scores_and_appends() {
        let config = GameConfig {
            obstacle_mode: ObstacleMode::Static,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = Round::new(&config, &mut rng);
        // Head right edge at 4 → -1 after this tick's advance.
        round.obstacles =
            ObstacleStream::from_obstacles(vec![open_pipe(-48.0), open_pipe(252.0), open_pipe(552.0)]);

        let result = round.tick(&config, false, &mut rng);
        assert!(result.scored);
        assert_eq!(result.ended, None);
        assert_eq!(round.score, 1);
        assert_eq!(round.obstacles.len(), 3);
        assert_eq!(round.obstacles.head().unwrap().x, 247.0);
        // spacing(1) = 295
        assert_eq!(round.obstacles.tail().unwrap().x, 547.0 + 295.0);
    }

    #[test]
    fn test_ground_ends_round() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = Round::new(&config, &mut rng);
        round.bird.y = 679.0;
        round.bird.velocity = 3.0;
        let result = round.tick(&config, false, &mut rng);
        assert_eq!(result.ended, Some(RoundEnd::Ground));
        assert_eq!(round.bird.y, config.floor_y());
        assert_eq!(round.bird.velocity, 0.0);
    }

    #[test]
    fn test_pipe_ends_round() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = Round::new(&config, &mut rng);
        round.obstacles = ObstacleStream::from_obstacles(vec![
            Obstacle {
                x: 95.0,
                reference_y: 400.0,
                is_oscillating: false,
            },
            open_pipe(400.0),
            open_pipe(700.0),
        ]);
        let result = round.tick(&config, false, &mut rng);
        assert_eq!(result.ended, Some(RoundEnd::Obstacle));
    }

    #[test]
    fn test_flapping_keeps_bird_alive_in_open_sky() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = Round::new(&config, &mut rng);
        // Push obstacles far away so only physics matters.
        round.obstacles = ObstacleStream::from_obstacles(vec![
            open_pipe(10_000.0),
            open_pipe(10_300.0),
            open_pipe(10_600.0),
        ]);
        for tick in 0..500 {
            let flap = tick % 20 == 0;
            let result = round.tick(&config, flap, &mut rng);
            assert_eq!(result.ended, None, "ended at tick {}", tick);
            assert!(round.bird.y >= config.ceiling_y() && round.bird.y <= config.floor_y());
        }
    }

    #[test]
    fn test_scenery_wraps() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = Round::new(&config, &mut rng);
        round.scenery_offset = -286.0;
        round.scroll_scenery(&config);
        assert_eq!(round.scenery_offset, 0.0);
    }
}
