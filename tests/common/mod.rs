//! Test utilities for kvstash integration tests.
//!
//! Provides:
//! - Temporary store fixtures
//! - Store handles with short lock timeouts

#![allow(dead_code)]

use kvstash::Store;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Lock timeout used by tests that expect contention to resolve quickly.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Test fixture that manages a temporary store directory.
///
/// The directory is automatically cleaned up when the fixture is dropped.
pub struct TestFixture {
    /// Temporary directory for the store
    pub temp_dir: TempDir,
    /// Path to the store file (not created until the first insert)
    pub db_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with a temporary directory.
    pub fn new() -> Self {
        kvstash::observability::tracing::init_test_tracing();
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        Self { temp_dir, db_path }
    }

    /// Store handle for the fixture's path.
    pub fn store(&self) -> Store {
        Store::open(&self.db_path).with_timeout(TEST_TIMEOUT)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.temp_dir.path().exists());
        assert!(!fixture.db_path.exists());
    }
}
