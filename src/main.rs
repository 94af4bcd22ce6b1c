use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::best_score::{BestScoreStore, FileStore, MemoryStore};
use flappy::core::{run, GameConfig, SleepClock};
use flappy::input::CrosstermInput;
use flappy::ui::TerminalRenderer;
use flappy::utils::logging;
use flappy::Game;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> io::Result<()> {
    // Without a log file the game still runs, just silently.
    let _ = logging::init();

    let config = GameConfig::load();
    log::info!("Starting with {:?}", config);

    match FileStore::new() {
        Ok(store) => {
            log::info!("Best score file: {}", store.path().display());
            play(config, store)
        }
        Err(e) => {
            log::warn!("No data directory ({}); best score kept in memory only", e);
            play(config, MemoryStore::default())
        }
    }
}

fn play<S: BestScoreStore>(config: GameConfig, store: S) -> io::Result<()> {
    let frame_delay_ms = config.frame_delay_ms;
    let mut game = Game::new(config, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    let result = (|| {
        let mut renderer = TerminalRenderer::new(CrosstermBackend::new(io::stdout()))?;
        let mut input = CrosstermInput;
        let mut clock = SleepClock::from_millis(frame_delay_ms);
        let mut rng = rand::thread_rng();
        run(&mut game, &mut input, &mut renderer, &mut clock, &mut rng)
    })();

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    match result {
        Ok(ticks) => {
            log::info!(
                "Exited after {} ticks, {} rounds, best {}",
                ticks,
                game.rounds_played(),
                game.best_score()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Game loop failed: {}", e);
            Err(e)
        }
    }
}
