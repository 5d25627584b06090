use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use crate::{
    db::{
        queries::{categories, questions},
        Category, Entity, Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extractors::{ApiJson, ApiPath, ApiQuery, DbConn},
        models::{ListLimits, ListParams, NewCategory},
    },
    telemetry::record_write,
};

use super::ApiResponse;

async fn create_category(
    State(pool): State<PgPool>,
    ApiJson(new_category): ApiJson<NewCategory>,
) -> ApiResponse<(StatusCode, Json<Category>)> {
    let DbConn(mut conn) = DbConn::acquire(&pool).await?;
    let category = categories::create_category(
        &mut conn,
        &new_category.name,
        new_category.description.as_deref(),
        &new_category.emoji,
    )
    .await?;

    tracing::info!(id = category.id, name = %category.name, "Category created");
    record_write("category", "create");
    Ok((StatusCode::CREATED, Json(category)))
}

async fn get_categories(
    State(limits): State<ListLimits>,
    ApiQuery(params): ApiQuery<ListParams>,
    DbConn(mut conn): DbConn,
) -> ApiResponse<Json<Vec<Category>>> {
    let limit = limits.resolve(params.limit);
    Ok(Json(categories::get_categories(&mut conn, limit).await?))
}

async fn category(ApiPath(id): ApiPath<i32>, DbConn(mut conn): DbConn) -> ApiResponse<Json<Category>> {
    Ok(Json(categories::get_category(&mut conn, id).await?))
}

async fn delete_category(ApiPath(id): ApiPath<i32>, DbConn(mut conn): DbConn) -> ApiResponse<StatusCode> {
    categories::delete_category(&mut conn, id).await?;
    tracing::info!(id, "Category deleted");
    record_write("category", "delete");
    Ok(StatusCode::NO_CONTENT)
}

async fn category_questions(
    ApiPath(id): ApiPath<i32>,
    DbConn(mut conn): DbConn,
) -> ApiResponse<Json<Vec<Question>>> {
    if !categories::category_exists(&mut conn, id).await? {
        return Err(ApiError::NotFound(Entity::Category));
    }
    Ok(Json(questions::get_questions_for_category(&mut conn, id).await?))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route("/categories/", get(get_categories).post(create_category))
        .route("/categories/{id}", get(category).delete(delete_category))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
