#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::{category, ModuleType};

/// Fresh, migrated in-memory SQLite database for one test.
///
/// A single pooled connection keeps every statement on the same in-memory
/// database; transactions hold that connection until commit or rollback.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Seed `Tech > Rust` in the book module and return their ids.
pub async fn seed_book_categories(db: &DatabaseConnection) -> Result<(i32, i32), anyhow::Error> {
    let tech = category::create(db, "Tech", ModuleType::Book, 0, 1).await?;
    let rust = category::create(db, "Rust", ModuleType::Book, tech.id, 1).await?;
    Ok((tech.id, rust.id))
}
