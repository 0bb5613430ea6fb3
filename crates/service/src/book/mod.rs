//! Book module: domain objects, persistence mapper and the record facade.

pub mod domain;
pub mod mapper;
pub mod service;

pub use domain::{BookDto, BookQuery, BookVo};
pub use service::{BookService, SeaOrmBookService};
