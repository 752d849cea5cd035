use tokio::sync::oneshot;
use crate::domain::{Book, CatalogEntry};
use crate::error::BookstoreResult;

/// Reply channel carried by every request.
pub type ServiceResponse<T> = oneshot::Sender<BookstoreResult<T>>;

/// Typed messages for the inventory service. Each variant includes parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum InventoryRequest {
    AddBook {
        book: Book,
        respond_to: ServiceResponse<Option<Book>>,
    },
    GetBook {
        isbn: String,
        respond_to: ServiceResponse<Option<Book>>,
    },
    RemoveBook {
        isbn: String,
        respond_to: ServiceResponse<Option<Book>>,
    },
    RemoveOutdatedBooks {
        years_limit: u32,
        respond_to: ServiceResponse<Vec<Book>>,
    },
    BuyBook {
        isbn: String,
        quantity: u32,
        email: String,
        address: String,
        respond_to: ServiceResponse<f64>,
    },
    ListBooks {
        respond_to: ServiceResponse<Vec<CatalogEntry>>,
    },
}
