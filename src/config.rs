//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is honoured when the binary calls
//! `dotenvy::dotenv()` before [`AppConfig::from_env`]:
//! ```text
//! BIKESHARE_DATA_DIR=/srv/bikeshare
//! LOG_FILE_PATH=logs/bikeshare_stats.log
//! ```

use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "BIKESHARE_DATA_DIR";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";

const DEFAULT_DATA_DIR: &str = ".";
const DEFAULT_LOG_FILE: &str = "logs/bikeshare_stats.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        AppConfig {
            data_dir: get(DATA_DIR_VAR, DEFAULT_DATA_DIR),
            log_file: get(LOG_FILE_VAR, DEFAULT_LOG_FILE),
        }
    }

    /// Replaces the data directory when one was given on the command line.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
