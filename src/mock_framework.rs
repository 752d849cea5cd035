//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_buy_book`] or [`expect_list_books`] to assert behavior
//! and answer on the reply channel.

use tokio::sync::mpsc;
use crate::clients::InventoryClient;
use crate::domain::{Book, CatalogEntry};
use crate::messages::{InventoryRequest, ServiceResponse};

/// A captured `BuyBook` request.
#[derive(Debug)]
pub struct BuyBookCall {
    pub isbn: String,
    pub quantity: u32,
    pub email: String,
    pub address: String,
    pub respond_to: ServiceResponse<f64>,
}

/// Creates a client whose requests land on a channel the test controls,
/// instead of a running [`InventoryService`](crate::actors::InventoryService).
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddBook request
pub async fn expect_add_book(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<(Book, ServiceResponse<Option<Book>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::AddBook { book, respond_to }) => Some((book, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a BuyBook request
pub async fn expect_buy_book(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<BuyBookCall> {
    match receiver.recv().await {
        Some(InventoryRequest::BuyBook { isbn, quantity, email, address, respond_to }) => Some(BuyBookCall {
            isbn,
            quantity,
            email,
            address,
            respond_to,
        }),
        _ => None,
    }
}

/// Helper to verify that the next message is a ListBooks request
pub async fn expect_list_books(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<ServiceResponse<Vec<CatalogEntry>>> {
    match receiver.recv().await {
        Some(InventoryRequest::ListBooks { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let book = Book::showcase("789", "Fawry Systems", 2019, 200.0, "Fawry Team").unwrap();
            client.add_book(book).await
        });

        let (book, responder) = expect_add_book(&mut receiver).await.expect("Expected AddBook request");
        assert_eq!(book.isbn(), "789");
        responder.send(Ok(None)).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }
}
