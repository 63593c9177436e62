use super::category_handlers::category_map;
use super::main_handlers::AppState;
use crate::error::AppError;
use crate::models::{
    CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, PageQuery, Question,
    QuestionListResponse, SearchRequest, SearchResponse,
};
use actix_web::{web, HttpResponse, Result};

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slices the full listing into the requested page. Pages are 1-based;
/// anything at or below zero yields the empty page.
fn paginate(questions: &[Question], page: i64) -> Vec<Question> {
    if page <= 0 {
        return Vec::new();
    }

    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    questions
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

pub async fn get_questions(
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let questions = data.database.all_questions()?;

    let page = query.page.unwrap_or(1);
    let current_questions = paginate(&questions, page);

    if current_questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = category_map(&data.database)?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        questions: current_questions,
        total_questions: questions.len(),
        categories,
        current_category: None,
    }))
}

pub async fn create_question(
    data: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    // No field validation here: the store's constraints are the only gate,
    // and any insert failure is reported as an opaque 422.
    let created = data
        .database
        .create_question(&req)
        .map_err(|_| AppError::Unprocessable)?;

    Ok(HttpResponse::Ok().json(CreateQuestionResponse {
        success: true,
        created,
    }))
}

pub async fn delete_question(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    // Absent id is 404; a failure in the delete itself is an opaque 422.
    data.database.question_by_id(id)?;
    data.database
        .delete_question(id)
        .map_err(|_| AppError::Unprocessable)?;

    Ok(HttpResponse::Ok().json(DeleteQuestionResponse {
        success: true,
        deleted: id,
    }))
}

/// Substring search over question text. Every failure in here, malformed
/// body included, maps to the contract's 405.
pub async fn search_questions(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: SearchRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::MethodNotAllowed)?;

    // Absent searchTerm matches everything.
    let term = request.search_term.unwrap_or_default();

    let questions = data
        .database
        .search_questions(&term)
        .map_err(|_| AppError::MethodNotAllowed)?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}
