use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, ModuleType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub module_type: ModuleType,
    pub rank: i32,
    /// 0 for a root node.
    pub parent_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation("category name must not be empty".into()));
    }
    if trimmed.chars().count() > 64 {
        return Err(errors::ModelError::Validation("category name too long (<=64)".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    module_type: ModuleType,
    parent_id: i32,
    rank: i32,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    if parent_id != 0 {
        let parent = Entity::find_by_id(parent_id).one(db).await?;
        match parent {
            Some(p) if p.module_type == module_type => {}
            Some(_) => return Err(errors::ModelError::Validation("parent category belongs to another module".into())),
            None => return Err(errors::ModelError::NotFound(format!("parent category {}", parent_id))),
        }
    }
    let am = ActiveModel {
        name: Set(name.trim().to_string()),
        module_type: Set(module_type),
        rank: Set(rank),
        parent_id: Set(parent_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
