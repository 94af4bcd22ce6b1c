use crate::core::constants::BEST_SCORE_FILE;
use crate::utils::persistence::data_path;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage for a single best-score integer.
pub trait BestScoreStore {
    /// Current stored best; 0 when nothing usable is stored.
    fn read(&self) -> u32;

    /// Replace the stored best.
    fn write(&mut self, score: u32) -> io::Result<()>;
}

/// Best score kept in a plain-text file holding one decimal integer.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at ~/.flappy/best_score.txt.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: data_path(BEST_SCORE_FILE)?,
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    fn read(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("Could not read {}: {}", self.path.display(), e);
                }
                return 0;
            }
        };

        match contents.trim().parse() {
            Ok(best) => best,
            Err(e) => {
                log::warn!(
                    "Ignoring malformed best score in {}: {}",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    fn write(&mut self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

/// In-process store, used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn read(&self) -> u32 {
        self.best
    }

    fn write(&mut self, score: u32) -> io::Result<()> {
        self.best = score;
        Ok(())
    }
}

/// Keeps the persisted best score equal to the highest final score seen.
pub struct BestScoreTracker<S: BestScoreStore> {
    store: S,
}

impl<S: BestScoreStore> BestScoreTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persisted best score.
    pub fn best(&self) -> u32 {
        self.store.read()
    }

    /// Record a round's final score.
    ///
    /// Writes only when `final_score` is strictly greater than the stored
    /// best. Returns whether a new best was written.
    pub fn record(&mut self, final_score: u32) -> io::Result<bool> {
        let best = self.store.read();
        if final_score <= best {
            return Ok(false);
        }
        self.store.write(final_score)?;
        log::info!("New best score {} (was {})", final_score, best);
        Ok(true)
    }
}
