use axum::extract::{FromRef, FromRequest, FromRequestParts};
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use super::error::ApiError;
use crate::db::QueryError;

/// A connection checked out of the pool, returned when dropped whichever way the handler exits.
///
/// As an extractor it must come after the path and query extractors so malformed
/// requests are turned away without waiting on the pool.
pub struct DbConn(pub PoolConnection<Postgres>);

impl DbConn {
    pub async fn acquire(pool: &PgPool) -> Result<Self, ApiError> {
        let conn = pool.acquire().await.map_err(QueryError::from)?;
        Ok(Self(conn))
    }
}

impl<S> FromRequestParts<S> for DbConn
where
    PgPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = PgPool::from_ref(state);
        Self::acquire(&pool).await
    }
}

/// `axum::Json` with body errors rendered like every other API error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
