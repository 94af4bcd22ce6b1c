//! Frame driver shared by the terminal front-end and the tests.
//!
//! The collaborators are traits so a session can be driven by real terminal
//! input and rendering, or by scripted input and a recording renderer.

use crate::best_score::BestScoreStore;
use crate::core::game_state::{Flow, Game, Snapshot};
use crate::input::GameInput;
use rand::Rng;
use std::io;
use std::thread;
use std::time::Duration;

/// Source of the inputs that arrived since the previous tick.
pub trait InputSource {
    /// Drain pending inputs without blocking.
    fn poll_inputs(&mut self) -> io::Result<Vec<GameInput>>;
}

/// Sink for one frame of game state.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Fixed delay between ticks.
pub trait FrameClock {
    fn wait(&mut self);
}

/// Sleeps the current thread for a fixed duration each tick.
pub struct SleepClock {
    delay: Duration,
}

impl SleepClock {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }
}

impl FrameClock for SleepClock {
    fn wait(&mut self) {
        thread::sleep(self.delay);
    }
}

/// Run ticks until a quit is requested: poll → simulate → render → wait.
///
/// Returns the number of ticks processed, including the one that quit.
pub fn run<S, I, D, C, R>(
    game: &mut Game<S>,
    input: &mut I,
    renderer: &mut D,
    clock: &mut C,
    rng: &mut R,
) -> io::Result<u64>
where
    S: BestScoreStore,
    I: InputSource,
    D: Renderer,
    C: FrameClock,
    R: Rng,
{
    let mut ticks = 0u64;
    loop {
        let inputs = input.poll_inputs()?;
        ticks += 1;
        if game.handle_tick(&inputs, rng) == Flow::Quit {
            return Ok(ticks);
        }
        renderer.render(&game.snapshot())?;
        clock.wait();
    }
}
