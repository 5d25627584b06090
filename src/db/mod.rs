pub mod answer;
pub mod error;
pub mod queries;

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::configuration::DatabaseSettings;

pub use answer::Answer;
pub use error::{Entity, QueryError};
pub use queries::categories::Category;
pub use queries::questions::{Question, QuestionFields};

/// Schema bootstrap. Only `CREATE ... IF NOT EXISTS` statements, safe to run on every start.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn establish_connection(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(settings.connect_options()?)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
