//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded by the binary
//! first) and may then be overridden from the command line.

use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_LOG_FILE: &str = "logs/bikeshare_stats.log";
/// Raw rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the per-city CSV files.
    pub data_dir: PathBuf,
    pub log_file_path: PathBuf,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Reads `BIKESHARE_DATA_DIR`, `LOG_FILE_PATH` and `BIKESHARE_PAGE_SIZE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(dir) = lookup("BIKESHARE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(path) = lookup("LOG_FILE_PATH") {
            config.log_file_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("BIKESHARE_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => warn!(value = %raw, "Invalid BIKESHARE_PAGE_SIZE, using default"),
            }
        }

        config
    }

    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, page_size: Option<usize>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(size) = page_size.filter(|s| *s > 0) {
            self.page_size = size;
        }
        self
    }
}
