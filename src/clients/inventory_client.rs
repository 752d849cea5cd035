use tokio::sync::mpsc;
use crate::domain::{Book, CatalogEntry};
use crate::messages::InventoryRequest;

/// Cloneable handle to the inventory service.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }
}

client_method!(InventoryClient => fn add_book(book: Book) -> Option<Book> as InventoryRequest::AddBook);
client_method!(InventoryClient => fn get_book(isbn: String) -> Option<Book> as InventoryRequest::GetBook);
client_method!(InventoryClient => fn remove_book(isbn: String) -> Option<Book> as InventoryRequest::RemoveBook);
client_method!(InventoryClient => fn remove_outdated_books(years_limit: u32) -> Vec<Book> as InventoryRequest::RemoveOutdatedBooks);
client_method!(InventoryClient => fn buy_book(isbn: String, quantity: u32, email: String, address: String) -> f64 as InventoryRequest::BuyBook, skip(email, address));
client_method!(InventoryClient => fn list_books() -> Vec<CatalogEntry> as InventoryRequest::ListBooks);
