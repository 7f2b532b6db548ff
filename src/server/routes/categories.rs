use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{Category, Question};
use crate::server::app::AppState;
use crate::server::deserializers::PageQuery;
use crate::server::pagination::paginate;

use super::{ApiError, ApiResponse};

#[derive(Serialize)]
struct CategoriesResponse {
    categories: BTreeMap<i64, String>,
    success: bool,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
    success: bool,
}

// the clients expect categories keyed by id; serde_json renders the integer
// keys as JSON object keys
pub(crate) fn categories_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

async fn list_categories(
    State(pool): State<SqlitePool>,
) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = categories::get_all_categories(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        categories: categories_map(&categories),
        success: true,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    category_id: Result<Path<i64>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;
    let page = page.map(|Query(q)| q.page).unwrap_or_default();

    let all = questions::get_questions_for_category(&pool, category_id)
        .await
        .map_err(|_| ApiError::NotFound)?;
    if all.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total_questions = all.len();
    Ok(Json(CategoryQuestionsResponse {
        questions: paginate(page.0, all),
        total_questions,
        current_category: category_id,
        success: true,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
