use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use sqlx::{PgConnection, PgPool};

use crate::{
    db::{
        queries::{categories, questions},
        Question, QuestionFields,
    },
    server::{
        app::AppState,
        error::ApiError,
        extractors::{ApiJson, ApiPath, DbConn},
        models::QuestionPayload,
    },
    telemetry::record_write,
};

use super::ApiResponse;

/// Category existence is checked before the answer letter, so a body failing both
/// reports the missing category. The check is advisory: a concurrent delete is still
/// caught by the foreign key.
async fn checked_fields(
    conn: &mut PgConnection,
    payload: QuestionPayload,
) -> ApiResponse<QuestionFields> {
    if !categories::category_exists(conn, payload.category_id).await? {
        return Err(ApiError::CategoryMissing);
    }
    QuestionFields::try_from(payload)
}

async fn create_question(
    State(pool): State<PgPool>,
    ApiJson(payload): ApiJson<QuestionPayload>,
) -> ApiResponse<(StatusCode, Json<Question>)> {
    let DbConn(mut conn) = DbConn::acquire(&pool).await?;
    let fields = checked_fields(&mut conn, payload).await?;

    let question = questions::create_question(&mut conn, &fields).await?;
    tracing::info!(id = question.id, category_id = question.category_id, "Question created");
    record_write("question", "create");
    Ok((StatusCode::CREATED, Json(question)))
}

async fn update_question(
    State(pool): State<PgPool>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<QuestionPayload>,
) -> ApiResponse<Json<Question>> {
    let DbConn(mut conn) = DbConn::acquire(&pool).await?;
    let fields = checked_fields(&mut conn, payload).await?;

    let question = questions::update_question(&mut conn, id, &fields).await?;
    tracing::info!(id, "Question updated");
    record_write("question", "update");
    Ok(Json(question))
}

async fn delete_question(ApiPath(id): ApiPath<i32>, DbConn(mut conn): DbConn) -> ApiResponse<StatusCode> {
    questions::delete_question(&mut conn, id).await?;
    tracing::info!(id, "Question deleted");
    record_write("question", "delete");
    Ok(StatusCode::NO_CONTENT)
}

async fn question(ApiPath(id): ApiPath<i32>, DbConn(mut conn): DbConn) -> ApiResponse<Json<Question>> {
    Ok(Json(questions::get_question(&mut conn, id).await?))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", post(create_question))
        .route("/questions/", post(create_question))
        .route(
            "/questions/{id}",
            get(question).put(update_question).delete(delete_question),
        )
        .with_state(state)
}
