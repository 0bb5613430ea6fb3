//! Tag links between owning records and tags, scoped by module.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

use models::{tag, tag_link, ModuleType};

use crate::errors::ServiceError;

#[async_trait]
pub trait TagService: Send + Sync {
    /// Link `tag_list` to the owner, creating tags that do not exist yet.
    async fn save_tag_and_new<C>(&self, conn: &C, tag_list: &[String], link_id: i32, module: ModuleType) -> Result<(), ServiceError>
    where
        C: ConnectionTrait;

    /// Tag names of one owner in link order.
    async fn list_by_link_id<C>(&self, conn: &C, link_id: i32, module: ModuleType) -> Result<Vec<String>, ServiceError>
    where
        C: ConnectionTrait;

    /// Tag names of several owners in one query. Owners without tags are absent from the map.
    async fn list_by_link_ids<C>(&self, conn: &C, link_ids: &[i32], module: ModuleType) -> Result<HashMap<i32, Vec<String>>, ServiceError>
    where
        C: ConnectionTrait;

    /// Remove every link of the owner. Tags are kept.
    async fn delete_tag_link<C>(&self, conn: &C, link_id: i32, module: ModuleType) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait;
}

/// Trim, validate and de-duplicate tag names keeping the first occurrence.
pub fn normalize_tag_list(tag_list: &[String]) -> Result<Vec<String>, ServiceError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(tag_list.len());
    for raw in tag_list {
        let name = tag::normalize_name(raw)?;
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }
    Ok(out)
}

async fn find_tag<C>(conn: &C, name: &str, module: ModuleType) -> Result<Option<tag::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    Ok(tag::Entity::find()
        .filter(tag::Column::Name.eq(name))
        .filter(tag::Column::ModuleType.eq(module))
        .one(conn)
        .await?)
}

/// Insert the tag unless (name, module) already exists, then return its id.
/// A row created concurrently by another writer is picked up by the re-select.
pub async fn insert_or_get_tag<C>(conn: &C, name: &str, module: ModuleType) -> Result<i32, ServiceError>
where
    C: ConnectionTrait,
{
    let am = tag::ActiveModel { name: Set(name.to_string()), module_type: Set(module), ..Default::default() };
    let inserted = tag::Entity::insert(am)
        .on_conflict(
            OnConflict::columns([tag::Column::Name, tag::Column::ModuleType])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    let t = find_tag(conn, name, module)
        .await?
        .ok_or_else(|| ServiceError::not_found("tag"))?;
    if inserted > 0 {
        debug!(tag_id = t.id, %name, %module, "tag_created");
    }
    Ok(t.id)
}

/// SeaORM-backed tag service.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeaOrmTagService;

#[async_trait]
impl TagService for SeaOrmTagService {
    async fn save_tag_and_new<C>(&self, conn: &C, tag_list: &[String], link_id: i32, module: ModuleType) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let names = normalize_tag_list(tag_list)?;
        for name in names {
            let tag_id = match find_tag(conn, &name, module).await? {
                Some(t) => t.id,
                None => insert_or_get_tag(conn, &name, module).await?,
            };
            let link = tag_link::ActiveModel {
                link_id: Set(link_id),
                tag_id: Set(tag_id),
                module_type: Set(module),
                ..Default::default()
            };
            tag_link::Entity::insert(link).exec(conn).await?;
        }
        Ok(())
    }

    async fn list_by_link_id<C>(&self, conn: &C, link_id: i32, module: ModuleType) -> Result<Vec<String>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let rows = tag_link::Entity::find()
            .filter(tag_link::Column::LinkId.eq(link_id))
            .filter(tag_link::Column::ModuleType.eq(module))
            .find_also_related(tag::Entity)
            .order_by_asc(tag_link::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().filter_map(|(_, t)| t.map(|t| t.name)).collect())
    }

    async fn list_by_link_ids<C>(&self, conn: &C, link_ids: &[i32], module: ModuleType) -> Result<HashMap<i32, Vec<String>>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut out: HashMap<i32, Vec<String>> = HashMap::new();
        if link_ids.is_empty() {
            return Ok(out);
        }
        let rows = tag_link::Entity::find()
            .filter(tag_link::Column::LinkId.is_in(link_ids.iter().copied()))
            .filter(tag_link::Column::ModuleType.eq(module))
            .find_also_related(tag::Entity)
            .order_by_asc(tag_link::Column::Id)
            .all(conn)
            .await?;
        for (link, t) in rows {
            if let Some(t) = t {
                out.entry(link.link_id).or_default().push(t.name);
            }
        }
        Ok(out)
    }

    async fn delete_tag_link<C>(&self, conn: &C, link_id: i32, module: ModuleType) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait,
    {
        let res = tag_link::Entity::delete_many()
            .filter(tag_link::Column::LinkId.eq(link_id))
            .filter(tag_link::Column::ModuleType.eq(module))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }
}
