use std::collections::HashMap;

use chrono::{DateTime, Utc};
use configs::PagingConfig;
use sea_orm::prelude::{Date, DateTimeWithTimeZone};
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use models::book;

use crate::errors::ServiceError;
use crate::pagination::{parse_flag, Pagination};

/// Transfer object for create/read/update. `tag_list` is carried alongside
/// the row and stored through the tag service, never on the book row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publish_date: Option<Date>,
    #[serde(default)]
    pub cover: Option<String>,
    pub category_id: String,
    #[serde(default)]
    pub recommend: bool,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub read_num: i32,
    #[serde(default)]
    pub like_num: i32,
    #[serde(default)]
    pub created_at: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub updated_at: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

impl BookDto {
    pub fn from_model(m: book::Model, tag_list: Vec<String>) -> Self {
        Self {
            id: Some(m.id),
            title: m.title,
            description: m.description,
            author: m.author,
            publisher: m.publisher,
            publish_date: m.publish_date,
            cover: m.cover,
            category_id: m.category_id,
            recommend: m.recommend,
            publish: m.publish,
            read_num: m.read_num,
            like_num: m.like_num,
            created_at: Some(m.created_at),
            updated_at: Some(m.updated_at),
            tag_list,
        }
    }

    /// Row-level checks. Returns the parsed category path.
    pub fn validate(&self) -> Result<Vec<i32>, ServiceError> {
        book::validate_title(&self.title)?;
        book::validate_author(&self.author)?;
        book::validate_cover(self.cover.as_deref())?;
        if self.read_num < 0 || self.like_num < 0 {
            return Err(ServiceError::Validation("read_num and like_num must be >= 0".into()));
        }
        Ok(book::parse_category_path(&self.category_id)?)
    }

    /// Active model for insert; id is generated, both timestamps are `now`.
    pub fn to_insert_model(&self, now: DateTime<Utc>) -> book::ActiveModel {
        let mut am = self.to_update_model(now);
        am.created_at = Set(now.into());
        am
    }

    /// Active model for update; id and `created_at` are left untouched.
    pub fn to_update_model(&self, now: DateTime<Utc>) -> book::ActiveModel {
        book::ActiveModel {
            id: NotSet,
            title: Set(self.title.trim().to_string()),
            description: Set(self.description.clone()),
            author: Set(self.author.trim().to_string()),
            publisher: Set(self.publisher.clone()),
            publish_date: Set(self.publish_date),
            cover: Set(self.cover.clone()),
            category_id: Set(normalize_category_path(&self.category_id)),
            recommend: Set(self.recommend),
            publish: Set(self.publish),
            read_num: Set(self.read_num),
            like_num: Set(self.like_num),
            created_at: NotSet,
            updated_at: Set(now.into()),
        }
    }
}

fn normalize_category_path(path: &str) -> String {
    path.split(',').map(str::trim).collect::<Vec<_>>().join(",")
}

/// List row: the book plus its rendered category breadcrumb and tag names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookVo {
    #[serde(flatten)]
    pub book: book::Model,
    pub category_list_str: String,
    pub tag_list: Vec<String>,
}

/// Filters accepted by the page query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub pagination: Pagination,
    pub title: Option<String>,
    pub publish: Option<bool>,
    pub recommend: Option<bool>,
}

impl BookQuery {
    pub fn from_params(params: &HashMap<String, String>, paging: &PagingConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            pagination: Pagination::from_params(params, paging)?,
            title: params
                .get("title")
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            publish: parse_flag(params, "publish")?,
            recommend: parse_flag(params, "recommend")?,
        })
    }
}
