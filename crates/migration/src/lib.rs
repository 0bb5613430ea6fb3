//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20190127_000001_create_category;
mod m20190127_000002_create_tag;
mod m20190127_000003_create_tag_link;
mod m20190127_000004_create_book;
mod m20190127_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20190127_000001_create_category::Migration),
            Box::new(m20190127_000002_create_tag::Migration),
            Box::new(m20190127_000003_create_tag_link::Migration),
            Box::new(m20190127_000004_create_book::Migration),
            // Indexes should always be applied last
            Box::new(m20190127_000005_add_indexes::Migration),
        ]
    }
}
