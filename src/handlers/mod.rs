// Main handlers (system/health handlers)
pub mod main_handlers;
pub use main_handlers::AppState;

// Category handlers module
pub mod category_handlers;

// Question handlers module
pub mod question_handlers;

// Quiz handlers module
pub mod quiz_handlers;
