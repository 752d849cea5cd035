use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::clients::InventoryClient;
use crate::delivery::{Courier, TracingCourier};
use crate::domain::{Book, CatalogEntry};
use crate::inventory::Inventory;
use crate::messages::{InventoryRequest, ServiceResponse};

// =============================================================================
// INVENTORY SERVICE
// =============================================================================

/// Owns the [`Inventory`] and applies requests one at a time.
///
/// Every request runs to completion before the next one is received, so each
/// purchase is atomic with respect to all other callers.
pub struct InventoryService<C: Courier + 'static = TracingCourier> {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory<C>,
}

impl<C: Courier + 'static> InventoryService<C> {
    pub fn new(buffer_size: usize, inventory: Inventory<C>) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, inventory };
        let client = InventoryClient::new(sender);
        (service, client)
    }

    /// Processes requests until every client has been dropped, then hands the
    /// inventory back.
    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) -> Inventory<C> {
        info!("InventoryService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::AddBook { book, respond_to } => {
                    self.handle_add_book(book, respond_to);
                }
                InventoryRequest::GetBook { isbn, respond_to } => {
                    self.handle_get_book(isbn, respond_to);
                }
                InventoryRequest::RemoveBook { isbn, respond_to } => {
                    self.handle_remove_book(isbn, respond_to);
                }
                InventoryRequest::RemoveOutdatedBooks { years_limit, respond_to } => {
                    self.handle_remove_outdated_books(years_limit, respond_to);
                }
                InventoryRequest::BuyBook { isbn, quantity, email, address, respond_to } => {
                    self.handle_buy_book(isbn, quantity, email, address, respond_to);
                }
                InventoryRequest::ListBooks { respond_to } => {
                    self.handle_list_books(respond_to);
                }
            }
        }
        info!("InventoryService stopped");
        self.inventory
    }

    #[instrument(fields(isbn = %book.isbn()), skip(self, book, respond_to))]
    fn handle_add_book(&mut self, book: Book, respond_to: ServiceResponse<Option<Book>>) {
        debug!("Processing add_book request");
        let replaced = self.inventory.add_book(book);
        let _ = respond_to.send(Ok(replaced));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_book(&self, isbn: String, respond_to: ServiceResponse<Option<Book>>) {
        debug!("Processing get_book request");
        let book = self.inventory.get(&isbn).cloned();
        let _ = respond_to.send(Ok(book));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove_book(&mut self, isbn: String, respond_to: ServiceResponse<Option<Book>>) {
        debug!("Processing remove_book request");
        let removed = self.inventory.remove_book(&isbn);
        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove_outdated_books(&mut self, years_limit: u32, respond_to: ServiceResponse<Vec<Book>>) {
        debug!("Processing remove_outdated_books request");
        let removed = self.inventory.remove_outdated_books(years_limit);
        info!(removed = removed.len(), "Outdated books removed");
        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(skip(self, email, address, respond_to))]
    fn handle_buy_book(
        &mut self,
        isbn: String,
        quantity: u32,
        email: String,
        address: String,
        respond_to: ServiceResponse<f64>,
    ) {
        debug!("Processing buy_book request");
        let result = self.inventory.buy_book(&isbn, quantity, &email, &address);
        if let Err(e) = &result {
            debug!(error = %e, "Purchase failed");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_books(&self, respond_to: ServiceResponse<Vec<CatalogEntry>>) {
        debug!("Processing list_books request");
        let _ = respond_to.send(Ok(self.inventory.list_books()));
    }
}
