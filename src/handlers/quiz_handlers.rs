use super::main_handlers::AppState;
use crate::error::AppError;
use crate::models::{Question, QuizRequest, QuizResponse};
use actix_web::{web, HttpResponse, Result};
use rand::seq::IndexedRandom;

/// Picks a random question from the chosen category that is not in the
/// client's previous-questions list. Every failure in here, malformed body
/// included, maps to the contract's 405.
///
/// The candidate pool is always scoped to the requested category id; the
/// web client's "all categories" sentinel (id 0) therefore only matches
/// rows whose category column is literally 0.
pub async fn play_quiz(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: QuizRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::MethodNotAllowed)?;

    let category = request.quiz_category.ok_or(AppError::MethodNotAllowed)?;

    let pool = data
        .database
        .questions_by_category(category.id)
        .map_err(|_| AppError::MethodNotAllowed)?;

    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !request.previous_questions.contains(&q.id))
        .collect();

    let question = candidates.choose(&mut rand::rng()).cloned();

    // success reflects "an unseen candidate existed", not request validity.
    Ok(HttpResponse::Ok().json(QuizResponse {
        success: question.is_some(),
        question,
    }))
}
