//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never fails; every setting has a default.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "STUDYPLAN_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "STUDYPLAN_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "STUDYPLAN_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "studyplan.sqlite3";

/// Resolved settings for opening the task store and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Logging stays disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: non_blank(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}
