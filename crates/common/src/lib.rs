//! Shared helpers for the blog admin binaries.

pub mod utils;
