//! SeaORM entities for the blog admin book module and the shared tag/category tables.

pub mod errors;
pub mod db;
pub mod module_type;
pub mod category;
pub mod tag;
pub mod tag_link;
pub mod book;

pub use module_type::ModuleType;

#[cfg(test)]
mod tests;
