use crate::domain::Book;

/// A single line of the catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
}

impl From<&Book> for CatalogEntry {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
        }
    }
}
