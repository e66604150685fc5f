//! Store configuration.
//!
//! A store is fully described by the path of its SQLite file and how long a
//! caller is willing to wait for the file lock when other connections hold
//! it.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default time to wait for a contended store (two hours).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7200);

/// Location and contention policy for one store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// Maximum time to wait for the database lock
    pub timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration for `path` with the default timeout.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the lock acquisition timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a configuration for tests with a short timeout.
    #[cfg(test)]
    pub fn test_config(path: PathBuf) -> Self {
        Self {
            path,
            timeout: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = StoreConfig::new("store.db");
        assert_eq!(config.timeout, Duration::from_secs(7200));
        assert_eq!(config.path, PathBuf::from("store.db"));
    }

    #[test]
    fn test_with_timeout() {
        let config = StoreConfig::new("store.db").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_test_config_is_short() {
        let config = StoreConfig::test_config(PathBuf::from("t.db"));
        assert!(config.timeout < Duration::from_secs(1));
    }
}
