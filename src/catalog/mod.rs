//! Content catalog clients
//!
//! Thin pass-throughs over the course-content REST API and the public books
//! API. Both degrade to empty results on failure; the rest of the gateway
//! treats them as opaque data providers.

mod books;
mod content;

pub use books::{BooksClient, DEFAULT_BOOKS_URL, Volume, VolumeInfo};
pub use content::{
    CatalogClient, Chapter, ChapterContent, ClassLevel, DEFAULT_API_URL, Question, Subject,
};
