//! Service layer for the blog admin book module.
//! - `book::BookService` is the record facade used by the admin transport.
//! - Tag and category services own the tables shared with other content modules.
//! - Collaborators are traits generic over `ConnectionTrait`, so writes compose in one transaction.

pub mod errors;
pub mod pagination;
pub mod tag_service;
pub mod category_service;
pub mod book;
#[cfg(test)]
pub mod test_support;

pub use book::{BookDto, BookService, BookVo, SeaOrmBookService};
pub use errors::ServiceError;
pub use pagination::PageResult;
