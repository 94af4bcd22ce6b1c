//! Integration test: round simulation
//!
//! Drives `Round` tick by tick and checks the physics, obstacle stream,
//! difficulty and collision rules together.

use flappy::flappy::difficulty::{gap, spacing};
use flappy::flappy::{Obstacle, ObstacleStream, Round, RoundEnd};
use flappy::{GameConfig, ObstacleMode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn pipe(x: f64, reference_y: f64) -> Obstacle {
    Obstacle {
        x,
        reference_y,
        is_oscillating: false,
    }
}

/// A round whose pipes are too far away to matter.
fn open_sky_round(config: &GameConfig, rng: &mut ChaCha8Rng) -> Round {
    let mut round = Round::new(config, rng);
    round.obstacles = ObstacleStream::from_obstacles(vec![
        pipe(100_000.0, 250.0),
        pipe(100_300.0, 250.0),
        pipe(100_600.0, 250.0),
    ]);
    round
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_velocity_grows_by_gravity_each_tick_without_flap() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut round = open_sky_round(&config, &mut rng);

    for _ in 0..30 {
        let before = round.bird.velocity;
        let result = round.tick(&config, false, &mut rng);
        assert!(result.ended.is_none());
        assert_eq!(round.bird.velocity, before + config.gravity);
    }
}

#[test]
fn test_flap_resets_velocity_then_gravity_applies() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut round = open_sky_round(&config, &mut rng);

    for prior in [-4.0, 0.0, 3.5, 12.0] {
        round.bird.y = 350.0;
        round.bird.velocity = prior;
        round.tick(&config, true, &mut rng);
        assert_eq!(round.bird.velocity, config.jump_strength + config.gravity);
    }
}

#[test]
fn test_free_fall_ends_on_ground() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut round = open_sky_round(&config, &mut rng);

    let mut ticks = 0;
    let end = loop {
        ticks += 1;
        if let Some(end) = round.tick(&config, false, &mut rng).ended {
            break end;
        }
        assert!(ticks < 1_000, "bird never landed");
    };

    assert_eq!(end, RoundEnd::Ground);
    assert_eq!(round.bird.y, config.floor_y());
    assert_eq!(round.bird.velocity, 0.0);
    // 350 → 680 needs sum(0.5 * k) >= 330, first reached at k = 36.
    assert_eq!(ticks, 36);
}

#[test]
fn test_ceiling_never_ends_round() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut round = open_sky_round(&config, &mut rng);

    for _ in 0..200 {
        let result = round.tick(&config, true, &mut rng);
        assert!(result.ended.is_none());
        assert!(round.bird.y >= config.bird_radius);
    }
    assert_eq!(round.bird.y, config.bird_radius);
    assert_eq!(round.bird.velocity, 0.0);
}

// =============================================================================
// Obstacle stream
// =============================================================================

#[test]
fn test_stream_always_holds_three_in_range() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut round = Round::new(&config, &mut rng);

    // Keep the bird alive artificially so the stream runs for a long time.
    for _ in 0..20_000 {
        round.bird.y = 350.0;
        round.bird.velocity = 0.0;
        let flap = rng.gen_bool(0.1);
        round.tick(&config, flap, &mut rng);

        assert_eq!(round.obstacles.len(), 3);
        for obstacle in round.obstacles.iter() {
            assert!(
                (150.0..=400.0).contains(&obstacle.reference_y),
                "reference height {} out of range",
                obstacle.reference_y
            );
        }
        let xs: Vec<f64> = round.obstacles.iter().map(|o| o.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "stream out of order");
    }
    assert!(round.score > 100);
}

#[test]
fn test_recycle_scores_once_and_appends_at_new_spacing() {
    let config = GameConfig {
        obstacle_mode: ObstacleMode::Static,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut round = open_sky_round(&config, &mut rng);
    round.score = 20;
    // Right edge at -1 after this tick's advance of 5.
    round.obstacles = ObstacleStream::from_obstacles(vec![
        pipe(-48.0, 250.0),
        pipe(250.0, 250.0),
        pipe(500.0, 250.0),
    ]);

    let result = round.tick(&config, false, &mut rng);

    assert!(result.scored);
    assert_eq!(round.score, 21);
    let xs: Vec<f64> = round.obstacles.iter().map(|o| o.x).collect();
    assert_eq!(xs[0], 245.0);
    assert_eq!(xs[1], 495.0);
    assert_eq!(xs[2], 495.0 + spacing(&config, 21));
    assert!(round.obstacles.iter().all(|o| o.x != -53.0));
}

#[test]
fn test_static_mode_pipes_never_move_vertically() {
    let config = GameConfig {
        obstacle_mode: ObstacleMode::Static,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut round = Round::new(&config, &mut rng);
    let heights: Vec<f64> = round.obstacles.iter().map(|o| o.reference_y).collect();

    for _ in 0..50 {
        round.bird.y = 350.0;
        round.tick(&config, false, &mut rng);
    }
    let after: Vec<f64> = round.obstacles.iter().map(|o| o.reference_y).collect();
    assert_eq!(heights, after);
}

// =============================================================================
// Difficulty and collision
// =============================================================================

#[test]
fn test_difficulty_at_score_fifty() {
    let config = GameConfig::default();
    assert_eq!(gap(&config, 50), 130.0);
    assert_eq!(gap(&config, 50), config.min_gap);
    assert_eq!(spacing(&config, 50), 180.0);
}

#[test]
fn test_collision_scenario_through_round() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    // Pipe at x = 95 is at 90 after the tick's advance. Bird velocity is
    // pre-set so gravity brings it back to 0 and y stays put.
    for (y, expected) in [
        (150.0, Some(RoundEnd::Obstacle)),
        (350.0, None),
        (520.0, Some(RoundEnd::Obstacle)),
    ] {
        let mut round = open_sky_round(&config, &mut rng);
        round.obstacles = ObstacleStream::from_obstacles(vec![
            pipe(95.0, 300.0),
            pipe(1_000.0, 300.0),
            pipe(1_300.0, 300.0),
        ]);
        round.bird.y = y;
        round.bird.velocity = -config.gravity;

        let result = round.tick(&config, false, &mut rng);
        assert_eq!(round.bird.y, y);
        assert_eq!(result.ended, expected, "bird at y={}", y);
    }
}

#[test]
fn test_passing_through_gap_scores_without_collision() {
    let config = GameConfig {
        obstacle_mode: ObstacleMode::Static,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut round = open_sky_round(&config, &mut rng);
    round.obstacles = ObstacleStream::from_obstacles(vec![
        pipe(130.0, 250.0),
        pipe(2_000.0, 250.0),
        pipe(2_300.0, 250.0),
    ]);

    // Hold the bird in the middle of the passage until the pipe is gone.
    let mut scored = false;
    for _ in 0..60 {
        round.bird.y = 350.0;
        round.bird.velocity = -config.gravity;
        let result = round.tick(&config, false, &mut rng);
        assert!(result.ended.is_none());
        scored |= result.scored;
    }
    assert!(scored);
    assert_eq!(round.score, 1);
}
