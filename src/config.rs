//! Configuration for the roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration for a roster instance
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the SQLite database file holding the `students` table
    pub db_path: PathBuf,

    /// How long a connection waits on a locked database (milliseconds)
    pub busy_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Identifier Configuration
    // -------------------------------------------------------------------------
    /// How the next roll number sequence is derived
    pub roll_no_strategy: RollNoStrategy,
}

/// Roll number sequence strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollNoStrategy {
    /// Next sequence = current row count + 1.
    ///
    /// Can reissue an existing roll number once any record has been deleted.
    #[default]
    RowCount,

    /// Next sequence = persisted high-water mark + 1 (never reissues)
    Counter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("students.db"),
            busy_timeout_ms: 5000,
            roll_no_strategy: RollNoStrategy::RowCount,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the busy timeout (in milliseconds)
    pub fn busy_timeout_ms(mut self, ms: u64) -> Self {
        self.config.busy_timeout_ms = ms;
        self
    }

    /// Set the roll number strategy
    pub fn roll_no_strategy(mut self, strategy: RollNoStrategy) -> Self {
        self.config.roll_no_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
