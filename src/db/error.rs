use std::fmt;

use thiserror::Error;

/// Table a failed lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Category,
    Question,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Category => f.write_str("Category"),
            Entity::Question => f.write_str("Question"),
        }
    }
}

/// Store failures with constraint violations split out of the generic database error.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{0} not found")]
    NotFound(Entity),

    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("check constraint violation: {0}")]
    CheckViolation(String),

    #[error("foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for QueryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::UniqueViolation(db_err.constraint().unwrap_or_default().to_owned())
            }
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
                Self::CheckViolation(db_err.constraint().unwrap_or_default().to_owned())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::ForeignKeyViolation(db_err.constraint().unwrap_or_default().to_owned())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(err)
            }
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_are_unavailable() {
        assert!(matches!(
            QueryError::from(sqlx::Error::PoolTimedOut),
            QueryError::Unavailable(_)
        ));
        assert!(matches!(
            QueryError::from(sqlx::Error::PoolClosed),
            QueryError::Unavailable(_)
        ));
    }

    #[test]
    fn other_failures_stay_generic() {
        assert!(matches!(
            QueryError::from(sqlx::Error::RowNotFound),
            QueryError::Database(_)
        ));
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(
            QueryError::NotFound(Entity::Question).to_string(),
            "Question not found"
        );
    }
}
