use super::setup_test_db;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = setup_test_db().await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// All migrations are applied and can be rolled back
#[tokio::test]
async fn test_migrations_up_and_down() -> Result<()> {
    let db = setup_test_db().await?;
    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert_eq!(applied.len(), migration::Migrator::migrations().len());

    migration::Migrator::down(&db, None).await?;
    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert!(applied.is_empty());
    Ok(())
}
