use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::quiz::draw_question;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: Option<i64>,
}

#[derive(Serialize)]
struct QuizResponse {
    question: Option<Question>,
    success: bool,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<Json<QuizResponse>> {
    let Json(body) = body.map_err(|_| ApiError::Unprocessable)?;

    // category id 0 is indistinguishable from "no category" and is rejected
    let category_id = body
        .quiz_category
        .and_then(|c| c.id)
        .filter(|id| *id != 0)
        .ok_or(ApiError::Unprocessable)?;

    let candidates = questions::get_questions_for_category(&pool, category_id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    if candidates.is_empty() {
        return Err(ApiError::Unprocessable);
    }

    let question = draw_question(&mut thread_rng(), &candidates, &body.previous_questions);
    if question.is_some() {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[category_id.to_string().as_str()])
            .inc();
    }

    Ok(Json(QuizResponse {
        question,
        success: true,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
