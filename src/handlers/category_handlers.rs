use super::main_handlers::AppState;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{CategoriesResponse, CategoryMap, CategoryQuestionsResponse};
use actix_web::{web, HttpResponse, Result};

/// Full category mapping, ordered by id. An empty category table is a
/// not-found condition for every caller.
pub(crate) fn category_map(database: &Database) -> AppResult<CategoryMap> {
    let categories = database.all_categories()?;
    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

pub async fn get_categories(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = category_map(&data.database)?;

    Ok(HttpResponse::Ok().json(CategoriesResponse { categories }))
}

/// Lists every question in the category, unpaginated. A category with no
/// questions yields an empty array, not a 404.
pub async fn get_category_questions(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let category_id = path.into_inner();

    let questions = data.database.questions_by_category(category_id)?;

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
