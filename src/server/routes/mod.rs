mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResponse<T> = Result<T, ApiError>;

/// The fixed failure taxonomy of the API. Whatever goes wrong inside a
/// handler is translated to one of these; no detail beyond the fixed message
/// reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Reserved; no handler currently produces it.
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
}

impl ApiError {
    fn status(self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(self) -> &'static str {
        match self {
            ApiError::BadRequest => "bad request",
            ApiError::NotFound => "resource not found",
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::Unprocessable => "unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error_code": status.as_u16(),
            "message": self.message(),
        }));
        (status, body).into_response()
    }
}

pub async fn not_found_fallback() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed_fallback() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use sqlx::SqlitePool;
    use tower::ServiceExt;

    use crate::db::queries::questions::{create_question, NewQuestion};
    use crate::db::test_support::test_pool;
    use crate::server::app::{api_router, AppState};

    pub async fn test_app() -> (Router, SqlitePool) {
        let pool = test_pool().await;
        (api_router(AppState::new(pool.clone())), pool)
    }

    pub async fn seed_question(pool: &SqlitePool, question: &str, category: &str) -> i64 {
        create_question(
            pool,
            NewQuestion {
                question: Some(question.to_owned()),
                answer: Some("answer".to_owned()),
                category: Some(category.to_owned()),
                difficulty: Some(1),
            },
        )
        .await
        .unwrap()
        .id
    }

    pub async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }
}
