//! Pagination utilities for service layer
//!
//! Parses page parameters from a request parameter map and wraps a fetched
//! page with its totals.

use std::collections::HashMap;

use configs::PagingConfig;
use serde::Serialize;

use crate::errors::ServiceError;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane bounds: page >= 1, per_page in `1..=max_per_page`.
    pub fn normalize(self, max_per_page: u32) -> Self {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, max_per_page.max(1));
        Self { page, per_page }
    }

    /// Read `page` and `limit`; absent keys fall back to page 1 and the configured default limit.
    pub fn from_params(params: &HashMap<String, String>, paging: &PagingConfig) -> Result<Self, ServiceError> {
        let page = parse_u32(params, PAGE_KEY)?.unwrap_or(1);
        let per_page = parse_u32(params, LIMIT_KEY)?.unwrap_or(paging.default_limit);
        Ok(Self { page, per_page }.normalize(paging.max_limit))
    }

    /// 0-based page index as used by the SeaORM paginator
    pub fn page_index(&self) -> u64 { (self.page.max(1) - 1) as u64 }

    pub fn page_size(&self) -> u64 { self.per_page as u64 }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 10 } }
}

fn parse_u32(params: &HashMap<String, String>, key: &str) -> Result<Option<u32>, ServiceError> {
    match params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ServiceError::Validation(format!("{} must be a non-negative integer, got '{}'", key, v))),
    }
}

/// Parse an optional boolean filter (`true`/`false`/`1`/`0`).
pub fn parse_flag(params: &HashMap<String, String>, key: &str) -> Result<Option<bool>, ServiceError> {
    match params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(v) => Err(ServiceError::Validation(format!("{} must be true or false, got '{}'", key, v))),
    }
}

/// One page of records plus totals.
#[derive(Clone, Debug, Serialize)]
pub struct PageResult<T> {
    pub total_count: u64,
    pub page_size: u64,
    pub total_page: u64,
    pub curr_page: u64,
    pub list: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(list: Vec<T>, total_count: u64, pagination: Pagination) -> Self {
        let page_size = pagination.page_size();
        Self {
            total_count,
            page_size,
            total_page: total_count.div_ceil(page_size.max(1)),
            curr_page: pagination.page as u64,
            list,
        }
    }
}
