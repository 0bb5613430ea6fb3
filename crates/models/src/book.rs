use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub author: String,
    pub publisher: Option<String>,
    pub publish_date: Option<Date>,
    pub cover: Option<String>,
    /// Comma-separated category id path, root first (e.g. `"1,5"`).
    pub category_id: String,
    pub recommend: bool,
    pub publish: bool,
    pub read_num: i32,
    pub like_num: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    let t = title.trim();
    if t.is_empty() {
        return Err(errors::ModelError::Validation("title must not be empty".into()));
    }
    if t.chars().count() > 128 {
        return Err(errors::ModelError::Validation("title too long (<=128)".into()));
    }
    Ok(())
}

pub fn validate_author(author: &str) -> Result<(), errors::ModelError> {
    if author.trim().chars().count() > 64 {
        return Err(errors::ModelError::Validation("author too long (<=64)".into()));
    }
    Ok(())
}

pub fn validate_cover(cover: Option<&str>) -> Result<(), errors::ModelError> {
    match cover {
        Some(u) if !u.is_empty() && !(u.starts_with("http://") || u.starts_with("https://") || u.starts_with('/')) => {
            Err(errors::ModelError::Validation("cover must be an http(s) url or an absolute path".into()))
        }
        _ => Ok(()),
    }
}

/// Parse the stored category path into ids. Rejects empty paths and non-numeric segments.
pub fn parse_category_path(path: &str) -> Result<Vec<i32>, errors::ModelError> {
    if path.trim().is_empty() {
        return Err(errors::ModelError::Validation("category_id must not be empty".into()));
    }
    path.split(',')
        .map(|seg| {
            seg.trim()
                .parse::<i32>()
                .map_err(|_| errors::ModelError::Validation(format!("invalid category id '{}'", seg.trim())))
        })
        .collect()
}
