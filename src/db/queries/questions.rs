use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<i64>,
}

/// Fields for a question to be inserted. All of them are optional at this
/// layer; the storage constraints decide what is acceptable.
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i64>,
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

// the category reference is stored as text, so the id is compared in its
// string form
pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category_id: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE category = ?1
ORDER BY id
        "#,
    )
    .bind(category_id.to_string())
    .fetch_all(pool)
    .await
}

pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE LOWER(question) LIKE '%' || LOWER(?1) || '%'
ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_question(pool: &SqlitePool, new: NewQuestion) -> anyhow::Result<Question> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(new.question)
    .bind(new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    let question = sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(question)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
DELETE FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
