use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::deserializers::{deserialize_category_ref, PageQuery};
use crate::server::pagination::paginate;

use super::categories::categories_map;
use super::{ApiError, ApiResponse};

#[derive(Serialize)]
struct QuestionListResponse {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
    categories: BTreeMap<i64, String>,
    success: bool,
}

#[derive(Serialize)]
struct SearchResponse {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
    success: bool,
}

#[derive(Serialize)]
struct StatusResponse {
    success: bool,
}

#[derive(Deserialize)]
struct NewQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_category_ref")]
    category: Option<String>,
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<QuestionListResponse>> {
    let page = page.map(|Query(q)| q.page).unwrap_or_default();

    let all = questions::get_all_questions(&pool)
        .await
        .map_err(|_| ApiError::NotFound)?;
    let total_questions = all.len();
    let page_items = paginate(page.0, all);
    if page_items.is_empty() {
        // running past the last page is reported as a missing resource
        return Err(ApiError::NotFound);
    }

    let categories = categories::get_all_categories(&pool)
        .await
        .map_err(|_| ApiError::NotFound)?;

    Ok(Json(QuestionListResponse {
        questions: page_items,
        total_questions,
        current_category: 1,
        categories: categories_map(&categories),
        success: true,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<Json<StatusResponse>> {
    let Json(body) = body.map_err(|_| ApiError::Unprocessable)?;

    questions::create_question(
        &pool,
        questions::NewQuestion {
            question: body.question,
            answer: body.answer,
            category: body.category,
            difficulty: body.difficulty,
        },
    )
    .await
    .map_err(|_| ApiError::Unprocessable)?;

    Ok(Json(StatusResponse { success: true }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<StatusResponse>> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let deleted = questions::delete_question(&pool, id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    if !deleted {
        // deleting a question that never existed is unprocessable, not a 404
        return Err(ApiError::Unprocessable);
    }
    Ok(Json(StatusResponse { success: true }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<Json<SearchResponse>> {
    let Json(body) = body.map_err(|_| ApiError::NotFound)?;
    let term = body.search_term.ok_or(ApiError::NotFound)?;

    let matches = questions::search_questions(&pool, &term)
        .await
        .map_err(|_| ApiError::NotFound)?;
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total_questions = matches.len();
    Ok(Json(SearchResponse {
        questions: matches,
        total_questions,
        current_category: 1,
        success: true,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
