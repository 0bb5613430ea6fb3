use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{tag, ModuleType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Id of the owning record within `module_type`.
    pub link_id: i32,
    pub tag_id: i32,
    pub module_type: ModuleType,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Tag }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Tag => Entity::belongs_to(tag::Entity)
                .from(Column::TagId)
                .to(tag::Column::Id)
                .into(),
        }
    }
}

impl Related<tag::Entity> for Entity {
    fn to() -> RelationDef { Relation::Tag.def() }
}

impl ActiveModelBehavior for ActiveModel {}
