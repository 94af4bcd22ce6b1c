//! Screen state machine: Menu → Playing → GameOver → Playing | Menu.

use crate::best_score::{BestScoreStore, BestScoreTracker};
use crate::core::config::{GameConfig, Viewport};
use crate::flappy::difficulty;
use crate::flappy::{Round, RoundEnd};
use crate::input::GameInput;
use rand::Rng;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// Whether the frame driver should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome of the last finished round, shown on the game-over screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub best: u32,
    pub new_best: bool,
    pub end: RoundEnd,
    /// Set when the best score could not be saved.
    pub save_error: Option<String>,
}

/// Bird as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub velocity: f64,
    pub wings_up: bool,
}

/// Obstacle as seen by the renderer, with the gap for the current score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub x: f64,
    pub width: f64,
    pub reference_y: f64,
    pub gap: f64,
    pub is_oscillating: bool,
}

/// Read-only view of the current tick, handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub screen: Screen,
    pub viewport: Viewport,
    pub bird: Option<BirdView>,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub best_score: u32,
    pub scenery_offset: f64,
    pub last_round: Option<RoundSummary>,
}

/// A whole game session: configuration, current screen, the round in
/// progress and the best-score tracker.
pub struct Game<S: BestScoreStore> {
    config: GameConfig,
    screen: Screen,
    round: Option<Round>,
    tracker: BestScoreTracker<S>,
    /// Best score as of the last load or record.
    best_score: u32,
    last_round: Option<RoundSummary>,
    rounds_played: u32,
}

impl<S: BestScoreStore> Game<S> {
    /// Start a session on the menu screen.
    pub fn new(config: GameConfig, store: S) -> Self {
        let tracker = BestScoreTracker::new(store);
        let best_score = tracker.best();
        Self {
            config,
            screen: Screen::Menu,
            round: None,
            tracker,
            best_score,
            last_round: None,
            rounds_played: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Mutable access to the running round, for scripted setups.
    pub fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn tracker(&self) -> &BestScoreTracker<S> {
        &self.tracker
    }

    /// Process one tick worth of inputs and advance the active screen.
    pub fn handle_tick<R: Rng>(&mut self, inputs: &[GameInput], rng: &mut R) -> Flow {
        if inputs.contains(&GameInput::Quit) {
            log::info!("Quit requested on {:?} screen", self.screen);
            return Flow::Quit;
        }

        match self.screen {
            Screen::Menu => {
                for input in inputs {
                    match input {
                        GameInput::Flap | GameInput::Confirm => {
                            self.start_round(rng);
                            break;
                        }
                        GameInput::Cancel => return Flow::Quit,
                        GameInput::Quit => {}
                    }
                }
            }
            Screen::Playing => {
                let flapped = inputs.contains(&GameInput::Flap);
                if let Some(round) = self.round.as_mut() {
                    let result = round.tick(&self.config, flapped, rng);
                    if let Some(end) = result.ended {
                        self.finish_round(end);
                    }
                } else {
                    self.start_round(rng);
                }
            }
            Screen::GameOver => {
                for input in inputs {
                    match input {
                        GameInput::Flap | GameInput::Confirm => {
                            self.start_round(rng);
                            break;
                        }
                        GameInput::Cancel => {
                            self.screen = Screen::Menu;
                            break;
                        }
                        GameInput::Quit => {}
                    }
                }
            }
        }

        Flow::Continue
    }

    fn start_round<R: Rng>(&mut self, rng: &mut R) {
        self.best_score = self.tracker.best();
        self.round = Some(Round::new(&self.config, rng));
        self.screen = Screen::Playing;
        self.rounds_played += 1;
        log::info!(
            "Round {} started (best {})",
            self.rounds_played,
            self.best_score
        );
    }

    fn finish_round(&mut self, end: RoundEnd) {
        let score = self.round.take().map(|r| r.score).unwrap_or(0);

        let (new_best, save_error) = match self.tracker.record(score) {
            Ok(new_best) => (new_best, None),
            Err(e) => {
                log::error!("Failed to save best score {}: {}", score, e);
                (false, Some(e.to_string()))
            }
        };
        self.best_score = if new_best {
            score
        } else {
            self.tracker.best().max(self.best_score)
        };

        log::info!(
            "Round {} over ({:?}): score {}, best {}",
            self.rounds_played,
            end,
            score,
            self.best_score
        );

        self.last_round = Some(RoundSummary {
            score,
            best: self.best_score,
            new_best,
            end,
            save_error,
        });
        self.screen = Screen::GameOver;
    }

    /// Capture what the renderer needs for this tick.
    pub fn snapshot(&self) -> Snapshot {
        let (bird, obstacles, score, scenery_offset) = match &self.round {
            Some(round) => {
                let gap = difficulty::gap(&self.config, round.score);
                let bird = BirdView {
                    x: round.bird.x,
                    y: round.bird.y,
                    radius: round.bird.radius,
                    velocity: round.bird.velocity,
                    wings_up: round.bird.wings_up,
                };
                let obstacles = round
                    .obstacles
                    .iter()
                    .map(|o| ObstacleView {
                        x: o.x,
                        width: self.config.obstacle_width,
                        reference_y: o.reference_y,
                        gap,
                        is_oscillating: o.is_oscillating,
                    })
                    .collect();
                (Some(bird), obstacles, round.score, round.scenery_offset)
            }
            None => (None, Vec::new(), 0, 0.0),
        };

        Snapshot {
            screen: self.screen,
            viewport: self.config.viewport,
            bird,
            obstacles,
            score,
            best_score: self.best_score,
            scenery_offset,
            last_round: self.last_round.clone(),
        }
    }
}
