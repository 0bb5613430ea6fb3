//! Category tree lookups shared by every content module.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use models::{category, ModuleType};

use crate::errors::ServiceError;

/// Rendered in place of an id that no longer resolves.
pub const DELETED_CATEGORY: &str = "[deleted]";
pub const PATH_SEPARATOR: &str = " > ";

#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All categories of a module, ordered by rank then id.
    async fn list<C>(&self, conn: &C, module: ModuleType) -> Result<Vec<category::Model>, ServiceError>
    where
        C: ConnectionTrait;

    async fn create<C>(
        &self,
        conn: &C,
        name: &str,
        module: ModuleType,
        parent_id: i32,
        rank: i32,
    ) -> Result<category::Model, ServiceError>
    where
        C: ConnectionTrait;

    /// Flatten a comma-separated id path into a breadcrumb using an already fetched category set.
    fn render_category_arr(&self, category_id: &str, categories: &[category::Model]) -> String {
        render_category_path(category_id, categories)
    }
}

pub fn render_category_path(category_id: &str, categories: &[category::Model]) -> String {
    if category_id.trim().is_empty() {
        return String::new();
    }
    category_id
        .split(',')
        .map(|seg| {
            seg.trim()
                .parse::<i32>()
                .ok()
                .and_then(|id| categories.iter().find(|c| c.id == id))
                .map(|c| c.name.as_str())
                .unwrap_or(DELETED_CATEGORY)
        })
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// SeaORM-backed category service.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeaOrmCategoryService;

#[async_trait]
impl CategoryService for SeaOrmCategoryService {
    async fn list<C>(&self, conn: &C, module: ModuleType) -> Result<Vec<category::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let rows = category::Entity::find()
            .filter(category::Column::ModuleType.eq(module))
            .order_by_asc(category::Column::Rank)
            .order_by_asc(category::Column::Id)
            .all(conn)
            .await?;
        Ok(rows)
    }

    async fn create<C>(
        &self,
        conn: &C,
        name: &str,
        module: ModuleType,
        parent_id: i32,
        rank: i32,
    ) -> Result<category::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let created = category::create(conn, name, module, parent_id, rank).await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn cat(id: i32, name: &str) -> category::Model {
        category::Model { id, name: name.to_string(), module_type: ModuleType::Book, rank: 0, parent_id: 0 }
    }

    #[test]
    fn renders_path_in_order() {
        let set = vec![cat(1, "Tech"), cat(5, "Rust")];
        assert_eq!(render_category_path("1,5", &set), "Tech > Rust");
        assert_eq!(render_category_path("5", &set), "Rust");
    }

    #[test]
    fn unknown_ids_render_as_deleted() {
        let set = vec![cat(1, "Tech")];
        assert_eq!(render_category_path("1,9", &set), "Tech > [deleted]");
        assert_eq!(render_category_path("x", &set), DELETED_CATEGORY);
        assert_eq!(render_category_path("", &set), "");
    }

    #[tokio::test]
    async fn list_is_scoped_and_ranked() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = SeaOrmCategoryService;

        let second = svc.create(&db, "Fiction", ModuleType::Book, 0, 2).await?;
        let first = svc.create(&db, "Tech", ModuleType::Book, 0, 1).await?;
        svc.create(&db, "Essays", ModuleType::Article, 0, 1).await?;

        let books = svc.list(&db, ModuleType::Book).await?;
        let ids: Vec<i32> = books.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(svc.list(&db, ModuleType::BookNote).await?.len(), 0);
        Ok(())
    }
}
