use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, tag_link, ModuleType};

pub const MAX_NAME_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub module_type: ModuleType,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { TagLink }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::TagLink => Entity::has_many(tag_link::Entity).into(),
        }
    }
}

impl Related<tag_link::Entity> for Entity {
    fn to() -> RelationDef { Relation::TagLink.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Trim a tag name and check its length.
pub fn normalize_name(name: &str) -> Result<String, errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation("tag name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(errors::ModelError::Validation(format!("tag name too long (<={})", MAX_NAME_LEN)));
    }
    Ok(trimmed.to_string())
}
