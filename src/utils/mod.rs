//! Utility modules: data directory persistence and logging.

pub mod logging;
pub mod persistence;
