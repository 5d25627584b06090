//! Constraint handling of the data access layer against a real store.

use quiz_api::db::queries::{categories, questions};
use quiz_api::db::{Answer, Entity, QueryError, QuestionFields};
use sqlx::PgPool;

fn fields(category_id: i32, answer: Answer) -> QuestionFields {
    QuestionFields {
        question: "Largest planet?".to_owned(),
        a_var: "Mars".to_owned(),
        b_var: "Jupiter".to_owned(),
        c_var: "Venus".to_owned(),
        d_var: "Earth".to_owned(),
        answer,
        category_id,
    }
}

#[sqlx::test(migrator = "quiz_api::db::MIGRATOR")]
#[ignore = "requires database"]
async fn unique_name_is_enforced_by_store(pool: PgPool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    categories::create_category(&mut conn, "Space", None, "🚀").await?;

    let err = categories::create_category(&mut conn, "Space", Some("again"), "🚀")
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::UniqueViolation(_)), "{err:?}");
    Ok(())
}

#[sqlx::test(migrator = "quiz_api::db::MIGRATOR")]
#[ignore = "requires database"]
async fn foreign_key_is_enforced_by_store(pool: PgPool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;

    let err = questions::create_question(&mut conn, &fields(5, Answer::B))
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::ForeignKeyViolation(_)), "{err:?}");
    Ok(())
}

#[sqlx::test(migrator = "quiz_api::db::MIGRATOR")]
#[ignore = "requires database"]
async fn answer_check_is_enforced_by_store(pool: PgPool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    let category = categories::create_category(&mut conn, "Space", None, "🚀").await?;

    let err: QueryError = sqlx::query(
        "INSERT INTO questions (question, a_var, b_var, c_var, d_var, answer, category_id)
         VALUES ('q', 'a', 'b', 'c', 'd', 'E', $1)",
    )
    .bind(category.id)
    .execute(&mut *conn)
    .await
    .unwrap_err()
    .into();
    assert!(matches!(err, QueryError::CheckViolation(_)), "{err:?}");
    Ok(())
}

#[sqlx::test(migrator = "quiz_api::db::MIGRATOR")]
#[ignore = "requires database"]
async fn deleting_category_cascades(pool: PgPool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    let category = categories::create_category(&mut conn, "Space", None, "🚀").await?;
    let first = questions::create_question(&mut conn, &fields(category.id, Answer::B)).await?;
    let second = questions::create_question(&mut conn, &fields(category.id, Answer::A)).await?;
    assert_eq!(first.answer, Answer::B);

    let listed = questions::get_questions_for_category(&mut conn, category.id).await?;
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    assert_eq!(categories::delete_category(&mut conn, category.id).await?, 1);
    assert!(!categories::category_exists(&mut conn, category.id).await?);
    for question in [first, second] {
        let err = questions::get_question(&mut conn, question.id).await.unwrap_err();
        assert!(matches!(err, QueryError::NotFound(Entity::Question)));
    }
    Ok(())
}

#[sqlx::test(migrator = "quiz_api::db::MIGRATOR")]
#[ignore = "requires database"]
async fn schema_bootstrap_is_idempotent(pool: PgPool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    categories::create_category(&mut conn, "Space", None, "🚀").await?;
    drop(conn);

    quiz_api::db::run_migrations(&pool).await?;
    sqlx::raw_sql(include_str!("../migrations/0001_create_quiz_tables.sql"))
        .execute(&pool)
        .await?;

    let mut conn = pool.acquire().await?;
    assert_eq!(categories::get_categories(&mut conn, 10).await?.len(), 1);
    Ok(())
}
