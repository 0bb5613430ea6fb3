//! Create `tag` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(string_len(Tag::Name, 50).not_null())
                    .col(integer(Tag::ModuleType).not_null())
                    .to_owned(),
            )
            .await?;

        // A tag name is unique within its module
        manager
            .create_index(
                Index::create()
                    .name("uniq_tag_name_module")
                    .table(Tag::Table)
                    .col(Tag::Name)
                    .col(Tag::ModuleType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tag::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
    Name,
    ModuleType,
}
