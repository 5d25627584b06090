use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};

use crate::db::{Answer, Entity, QueryError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub a_var: String,
    pub b_var: String,
    pub c_var: String,
    pub d_var: String,
    pub answer: Answer,
    pub category_id: i32,
}

/// Writable columns of a question, shared by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFields {
    pub question: String,
    pub a_var: String,
    pub b_var: String,
    pub c_var: String,
    pub d_var: String,
    pub answer: Answer,
    pub category_id: i32,
}

pub async fn create_question(
    conn: &mut PgConnection,
    fields: &QuestionFields,
) -> Result<Question, QueryError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
INSERT INTO questions (question, a_var, b_var, c_var, d_var, answer, category_id)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING id, question, a_var, b_var, c_var, d_var, answer, category_id
        "#,
    )
    .bind(&fields.question)
    .bind(&fields.a_var)
    .bind(&fields.b_var)
    .bind(&fields.c_var)
    .bind(&fields.d_var)
    .bind(fields.answer)
    .bind(fields.category_id)
    .fetch_one(conn)
    .await?;

    Ok(question)
}

pub async fn update_question(
    conn: &mut PgConnection,
    id: i32,
    fields: &QuestionFields,
) -> Result<Question, QueryError> {
    sqlx::query_as::<_, Question>(
        r#"
UPDATE questions
SET question = $1, a_var = $2, b_var = $3, c_var = $4, d_var = $5, answer = $6, category_id = $7
WHERE id = $8
RETURNING id, question, a_var, b_var, c_var, d_var, answer, category_id
        "#,
    )
    .bind(&fields.question)
    .bind(&fields.a_var)
    .bind(&fields.b_var)
    .bind(&fields.c_var)
    .bind(&fields.d_var)
    .bind(fields.answer)
    .bind(fields.category_id)
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or(QueryError::NotFound(Entity::Question))
}

pub async fn delete_question(conn: &mut PgConnection, id: i32) -> Result<(), QueryError> {
    let affected = sqlx::query(
        r#"
DELETE FROM questions WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(QueryError::NotFound(Entity::Question));
    }
    Ok(())
}

pub async fn get_question(conn: &mut PgConnection, id: i32) -> Result<Question, QueryError> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, a_var, b_var, c_var, d_var, answer, category_id
FROM questions WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or(QueryError::NotFound(Entity::Question))
}

pub async fn get_questions_for_category(
    conn: &mut PgConnection,
    category_id: i32,
) -> Result<Vec<Question>, QueryError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, a_var, b_var, c_var, d_var, answer, category_id
FROM questions
WHERE category_id = $1
ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(conn)
    .await?;

    Ok(questions)
}
