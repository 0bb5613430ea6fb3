use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Category: listing is always scoped by module
        manager
            .create_index(
                Index::create()
                    .name("idx_category_module")
                    .table(Category::Table)
                    .col(Category::ModuleType)
                    .to_owned(),
            )
            .await?;

        // Book: title search and the publish/recommend filters
        manager
            .create_index(
                Index::create()
                    .name("idx_book_title")
                    .table(Book::Table)
                    .col(Book::Title)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_book_publish_recommend")
                    .table(Book::Table)
                    .col(Book::Publish)
                    .col(Book::Recommend)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_category_module").table(Category::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_book_title").table(Book::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_book_publish_recommend").table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Category { Table, ModuleType }

#[derive(DeriveIden)]
enum Book { Table, Title, Publish, Recommend }
