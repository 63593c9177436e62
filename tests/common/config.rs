use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::TempDir;

use trivia_api::config::{AppConfig, DatabaseConfig, ServerConfig};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Get a unique test identifier for isolation
pub fn get_unique_test_id() -> String {
    let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let pid = std::process::id();
    format!("test-{}-{}", pid, counter)
}

/// Test-specific configuration that provides complete isolation
#[derive(Debug)]
pub struct TestConfig {
    pub temp_dir: TempDir,
    pub config: AppConfig,
    pub test_id: String,
}

#[allow(dead_code)]
impl TestConfig {
    /// Create a new isolated test configuration
    pub fn new() -> Self {
        let test_id = get_unique_test_id();
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory for test");

        let db_path = temp_dir.path().join(format!("trivia-{}.db", test_id));

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Use port 0 for automatic assignment
            },
            database: DatabaseConfig { path: db_path },
        };

        Self {
            temp_dir,
            config,
            test_id,
        }
    }

    /// Get the isolated database path
    pub fn db_path(&self) -> &PathBuf {
        &self.config.database.path
    }

    /// Get the temp directory path
    pub fn temp_dir_path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_test_ids() {
        let config1 = TestConfig::new();
        let config2 = TestConfig::new();

        assert_ne!(config1.test_id, config2.test_id);
        assert!(config1.test_id.starts_with("test-"));
    }

    #[test]
    fn test_isolated_paths() {
        let config = TestConfig::new();

        assert!(config.db_path().starts_with(config.temp_dir.path()));
        assert!(config.db_path().to_string_lossy().contains(&config.test_id));
    }
}
