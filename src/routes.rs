//! Centralized route configuration for the trivia API.
//!
//! This module provides a shared function to configure all application
//! routes, allowing both the main server and test servers to use the same
//! routing setup.

use crate::error::AppError;
use crate::handlers::{category_handlers, main_handlers, question_handlers, quiz_handlers};
use actix_web::web;

/// Configures all application routes for the given scope.
///
/// Framework-level extractor failures are pinned to the contract's error
/// bodies here: malformed JSON or query strings render the 400 body, and a
/// non-numeric path id renders the 404 body.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|_err, _req| AppError::BadRequest.into()))
        .app_data(
            web::QueryConfig::default().error_handler(|_err, _req| AppError::BadRequest.into()),
        )
        .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()))
        .route("/health", web::get().to(main_handlers::health_check))
        .route(
            "/categories",
            web::get().to(category_handlers::get_categories),
        )
        .route(
            "/categories/{id}/questions",
            web::get().to(category_handlers::get_category_questions),
        )
        .route(
            "/questions",
            web::get().to(question_handlers::get_questions),
        )
        .route(
            "/questions",
            web::post().to(question_handlers::create_question),
        )
        .route(
            "/questions/search",
            web::post().to(question_handlers::search_questions),
        )
        .route(
            "/questions/{id}",
            web::delete().to(question_handlers::delete_question),
        )
        .route("/quizzes", web::post().to(quiz_handlers::play_quiz));
}
