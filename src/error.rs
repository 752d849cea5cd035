use thiserror::Error;

/// Errors raised by the catalog model, the inventory and the inventory service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookstoreError {
    #[error("Book not found: {0}")]
    NotFound(String),
    #[error("Book is not for sale: {0}")]
    NotPurchasable(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Cannot deliver showcase book: {0}")]
    UnsupportedDelivery(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

pub type BookstoreResult<T> = std::result::Result<T, BookstoreError>;
