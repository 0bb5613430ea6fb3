use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use configs::PagingConfig;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{debug, info, instrument, warn};

use models::ModuleType;

use crate::book::domain::{BookDto, BookQuery, BookVo};
use crate::book::mapper::{BookMapper, SeaOrmBookMapper};
use crate::category_service::{CategoryService, SeaOrmCategoryService};
use crate::errors::ServiceError;
use crate::pagination::PageResult;
use crate::tag_service::{SeaOrmTagService, TagService};

const MODULE: ModuleType = ModuleType::Book;

/// Book record facade.
///
/// Composes the book mapper with the shared tag and category services.
/// Every write runs in one database transaction: it commits only when all
/// steps succeed and is rolled back on the first error.
pub struct BookService<M: BookMapper, T: TagService, C: CategoryService> {
    db: DatabaseConnection,
    mapper: Arc<M>,
    tags: Arc<T>,
    categories: Arc<C>,
    paging: PagingConfig,
}

pub type SeaOrmBookService = BookService<SeaOrmBookMapper, SeaOrmTagService, SeaOrmCategoryService>;

impl SeaOrmBookService {
    pub fn with_db(db: DatabaseConnection, paging: PagingConfig) -> Self {
        Self::new(db, Arc::new(SeaOrmBookMapper), Arc::new(SeaOrmTagService), Arc::new(SeaOrmCategoryService), paging)
    }
}

impl<M: BookMapper, T: TagService, C: CategoryService> BookService<M, T, C> {
    pub fn new(db: DatabaseConnection, mapper: Arc<M>, tags: Arc<T>, categories: Arc<C>, paging: PagingConfig) -> Self {
        Self { db, mapper, tags, categories, paging }
    }

    /// Page of books with rendered category path and tag names.
    ///
    /// Categories are fetched once per call and tags once per page.
    #[instrument(skip_all)]
    pub async fn query_page(&self, params: &HashMap<String, String>) -> Result<PageResult<BookVo>, ServiceError> {
        let query = BookQuery::from_params(params, &self.paging)?;
        let (rows, total) = self.mapper.list_page(&self.db, &query).await?;
        let categories = self.categories.list(&self.db, MODULE).await?;
        let ids: Vec<i32> = rows.iter().map(|b| b.id).collect();
        let mut tags = self.tags.list_by_link_ids(&self.db, &ids, MODULE).await?;

        let list = rows
            .into_iter()
            .map(|book| BookVo {
                category_list_str: self.categories.render_category_arr(&book.category_id, &categories),
                tag_list: tags.remove(&book.id).unwrap_or_default(),
                book,
            })
            .collect::<Vec<_>>();
        debug!(total, returned = list.len(), page = query.pagination.page, "book_page");
        Ok(PageResult::new(list, total, query.pagination))
    }

    /// Insert a book and link its tags. Returns the generated id.
    #[instrument(skip(self, book), fields(title = %book.title))]
    pub async fn save_book(&self, book: &BookDto) -> Result<i32, ServiceError> {
        let category_path = book.validate()?;
        let txn = self.db.begin().await.map_err(ServiceError::transaction)?;
        let result = self.save_in(&txn, book, &category_path).await;
        let id = finish(txn, result, "save_book").await?;
        info!(book_id = id, tags = book.tag_list.len(), "book_saved");
        Ok(id)
    }

    async fn save_in(&self, txn: &DatabaseTransaction, book: &BookDto, category_path: &[i32]) -> Result<i32, ServiceError> {
        self.ensure_categories(txn, category_path).await?;
        let id = self.mapper.insert(txn, book.to_insert_model(Utc::now())).await?;
        self.tags.save_tag_and_new(txn, &book.tag_list, id, MODULE).await?;
        Ok(id)
    }

    /// Book with its tag names. A missing row is `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_book(&self, id: i32) -> Result<BookDto, ServiceError> {
        let book = self
            .mapper
            .select_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))?;
        let tag_list = self.tags.list_by_link_id(&self.db, book.id, MODULE).await?;
        Ok(BookDto::from_model(book, tag_list))
    }

    /// Replace the tag links then update the row, in one transaction.
    #[instrument(skip(self, book), fields(book_id = ?book.id))]
    pub async fn update_book(&self, book: &BookDto) -> Result<(), ServiceError> {
        let id = book.id.ok_or_else(|| ServiceError::Validation("id is required for update".into()))?;
        let category_path = book.validate()?;
        let txn = self.db.begin().await.map_err(ServiceError::transaction)?;
        let result = self.update_in(&txn, id, book, &category_path).await;
        finish(txn, result, "update_book").await?;
        info!(book_id = id, tags = book.tag_list.len(), "book_updated");
        Ok(())
    }

    async fn update_in(&self, txn: &DatabaseTransaction, id: i32, book: &BookDto, category_path: &[i32]) -> Result<(), ServiceError> {
        self.ensure_categories(txn, category_path).await?;
        self.tags.delete_tag_link(txn, id, MODULE).await?;
        self.tags.save_tag_and_new(txn, &book.tag_list, id, MODULE).await?;
        let affected = self.mapper.update_by_id(txn, id, book.to_update_model(Utc::now())).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("book"));
        }
        Ok(())
    }

    /// Delete books and their tag links. Returns the number of deleted rows.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_batch(&self, ids: &[i32]) -> Result<u64, ServiceError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let txn = self.db.begin().await.map_err(ServiceError::transaction)?;
        let result = self.delete_in(&txn, ids).await;
        let deleted = finish(txn, result, "delete_batch").await?;
        info!(requested = ids.len(), deleted, "books_deleted");
        Ok(deleted)
    }

    async fn delete_in(&self, txn: &DatabaseTransaction, ids: &[i32]) -> Result<u64, ServiceError> {
        for id in ids {
            self.tags.delete_tag_link(txn, *id, MODULE).await?;
        }
        self.mapper.delete_batch_ids(txn, ids).await
    }

    /// Every id of the path must be a category of the book module.
    async fn ensure_categories(&self, txn: &DatabaseTransaction, category_path: &[i32]) -> Result<(), ServiceError> {
        let categories = self.categories.list(txn, MODULE).await?;
        match category_path.iter().find(|id| !categories.iter().any(|c| c.id == **id)) {
            Some(missing) => Err(ServiceError::NotFound(format!("category {} not found in {} module", missing, MODULE))),
            None => Ok(()),
        }
    }
}

/// Commit on success, roll back on error. The step error wins over a rollback error.
async fn finish<R>(txn: DatabaseTransaction, result: Result<R, ServiceError>, op: &'static str) -> Result<R, ServiceError> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(ServiceError::transaction)?;
            Ok(value)
        }
        Err(e) => {
            warn!(op, error = %e, code = e.code(), "rolling back");
            if let Err(rb) = txn.rollback().await {
                warn!(op, error = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}
