//! Create `tag_link` table.
//! Many-to-many association between an owning record (`link_id` + `module_type`) and a tag.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagLink::Table)
                    .if_not_exists()
                    .col(pk_auto(TagLink::Id))
                    .col(integer(TagLink::LinkId).not_null())
                    .col(integer(TagLink::TagId).not_null())
                    .col(integer(TagLink::ModuleType).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_link_tag")
                            .from(TagLink::Table, TagLink::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_tag_link_owner_tag")
                    .table(TagLink::Table)
                    .col(TagLink::LinkId)
                    .col(TagLink::ModuleType)
                    .col(TagLink::TagId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TagLink::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TagLink {
    Table,
    Id,
    LinkId,
    TagId,
    ModuleType,
}

#[derive(DeriveIden)]
enum Tag { Table, Id }
