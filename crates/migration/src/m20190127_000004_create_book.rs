//! Create `book` table.
//! `category_id` stores the comma-separated id path from the root category to the leaf.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_len(Book::Title, 128).not_null())
                    .col(text_null(Book::Description))
                    .col(string_len(Book::Author, 64).not_null())
                    .col(string_len_null(Book::Publisher, 128))
                    .col(date_null(Book::PublishDate))
                    .col(string_len_null(Book::Cover, 512))
                    .col(string_len(Book::CategoryId, 128).not_null())
                    .col(boolean(Book::Recommend).not_null().default(false))
                    .col(boolean(Book::Publish).not_null().default(false))
                    .col(integer(Book::ReadNum).not_null().default(0))
                    .col(integer(Book::LikeNum).not_null().default(0))
                    .col(timestamp_with_time_zone(Book::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Book::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Book::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Book {
    Table,
    Id,
    Title,
    Description,
    Author,
    Publisher,
    PublishDate,
    Cover,
    CategoryId,
    Recommend,
    Publish,
    ReadNum,
    LikeNum,
    CreatedAt,
    UpdatedAt,
}
