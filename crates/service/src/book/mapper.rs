use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use models::book;

use crate::book::domain::BookQuery;
use crate::errors::ServiceError;

/// Persistence operations on the `book` table. Every method runs on the
/// connection it is given, so callers decide whether it is part of a transaction.
#[async_trait]
pub trait BookMapper: Send + Sync {
    /// One page matching the filters, newest first, plus the total match count.
    async fn list_page<C>(&self, conn: &C, query: &BookQuery) -> Result<(Vec<book::Model>, u64), ServiceError>
    where
        C: ConnectionTrait;

    async fn select_by_id<C>(&self, conn: &C, id: i32) -> Result<Option<book::Model>, ServiceError>
    where
        C: ConnectionTrait;

    /// Insert and return the generated id.
    async fn insert<C>(&self, conn: &C, book: book::ActiveModel) -> Result<i32, ServiceError>
    where
        C: ConnectionTrait;

    /// Returns affected row count.
    async fn update_by_id<C>(&self, conn: &C, id: i32, book: book::ActiveModel) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait;

    async fn delete_batch_ids<C>(&self, conn: &C, ids: &[i32]) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait;
}

/// Escape `LIKE` wildcards so a title filter matches literally. Pairs with `ESCAPE '\\'`.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// SeaORM-backed mapper implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeaOrmBookMapper;

#[async_trait]
impl BookMapper for SeaOrmBookMapper {
    async fn list_page<C>(&self, conn: &C, query: &BookQuery) -> Result<(Vec<book::Model>, u64), ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut select = book::Entity::find();
        if let Some(title) = &query.title {
            let pattern = format!("%{}%", escape_like(title));
            select = select.filter(book::Column::Title.like(LikeExpr::new(pattern).escape('\\')));
        }
        if let Some(publish) = query.publish {
            select = select.filter(book::Column::Publish.eq(publish));
        }
        if let Some(recommend) = query.recommend {
            select = select.filter(book::Column::Recommend.eq(recommend));
        }
        let paginator = select
            .order_by_desc(book::Column::Id)
            .paginate(conn, query.pagination.page_size());
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(query.pagination.page_index()).await?;
        Ok((rows, total))
    }

    async fn select_by_id<C>(&self, conn: &C, id: i32) -> Result<Option<book::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(book::Entity::find_by_id(id).one(conn).await?)
    }

    async fn insert<C>(&self, conn: &C, book: book::ActiveModel) -> Result<i32, ServiceError>
    where
        C: ConnectionTrait,
    {
        let res = book::Entity::insert(book).exec(conn).await?;
        Ok(res.last_insert_id)
    }

    async fn update_by_id<C>(&self, conn: &C, id: i32, book: book::ActiveModel) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait,
    {
        let res = book::Entity::update_many()
            .set(book)
            .filter(book::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete_batch_ids<C>(&self, conn: &C, ids: &[i32]) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(0);
        }
        let res = book::Entity::delete_many()
            .filter(book::Column::Id.is_in(ids.iter().copied()))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }
}
