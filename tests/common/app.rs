use actix_web::web;
use std::sync::Arc;
use std::time::SystemTime;

use trivia_api::database::Database;
use trivia_api::handlers::AppState;

use super::config::TestConfig;
use super::database::TestDatabase;

/// TestApp provides a fully configured test application with isolated
/// resources
pub struct TestApp {
    pub database: TestDatabase,
    pub app_state: web::Data<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new isolated test application
    pub fn new() -> Self {
        let database = TestDatabase::new().expect("Failed to create test database");

        let app_state = web::Data::new(AppState {
            database: database.database.clone(),
            start_time: SystemTime::now(),
        });

        Self {
            database,
            app_state,
        }
    }

    /// Get the app state
    pub fn app_state(&self) -> &web::Data<AppState> {
        &self.app_state
    }

    /// Get the database
    pub fn db(&self) -> &Arc<Database> {
        &self.database.database
    }

    /// Get the test configuration
    pub fn test_config(&self) -> &TestConfig {
        &self.database.config
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
