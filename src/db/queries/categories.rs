use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};

use crate::db::{Entity, QueryError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub emoji: String,
}

pub async fn create_category(
    conn: &mut PgConnection,
    name: &str,
    description: Option<&str>,
    emoji: &str,
) -> Result<Category, QueryError> {
    let category = sqlx::query_as::<_, Category>(
        r#"
INSERT INTO categories (name, description, emoji) VALUES ($1, $2, $3)
RETURNING id, name, description, emoji
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(emoji)
    .fetch_one(conn)
    .await?;

    Ok(category)
}

pub async fn get_categories(conn: &mut PgConnection, limit: i64) -> Result<Vec<Category>, QueryError> {
    let categories = sqlx::query_as::<_, Category>(
        r#"
SELECT id, name, description, emoji
FROM categories
ORDER BY id
LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(conn)
    .await?;

    Ok(categories)
}

pub async fn get_category(conn: &mut PgConnection, id: i32) -> Result<Category, QueryError> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, name, description, emoji FROM categories WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or(QueryError::NotFound(Entity::Category))
}

pub async fn category_exists(conn: &mut PgConnection, id: i32) -> Result<bool, QueryError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}

/// Questions of the category go with it through `ON DELETE CASCADE`.
pub async fn delete_category(conn: &mut PgConnection, id: i32) -> Result<u64, QueryError> {
    let affected = sqlx::query(
        r#"
DELETE FROM categories WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(QueryError::NotFound(Entity::Category));
    }
    Ok(affected)
}
