use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Content module discriminator for the shared `tag`, `tag_link` and `category` tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    #[sea_orm(num_value = 0)]
    Article,
    #[sea_orm(num_value = 1)]
    Book,
    #[sea_orm(num_value = 2)]
    BookNote,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Article => "article",
            ModuleType::Book => "book",
            ModuleType::BookNote => "book_note",
        }
    }
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
