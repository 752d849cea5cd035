use tracing::{error, info};
use crate::actors::InventoryService;
use crate::app_system::BookstoreConfig;
use crate::clients::InventoryClient;
use crate::inventory::Inventory;

/// The running bookstore: the inventory service plus the handles that talk to it.
///
/// Responsible for starting the service, wiring clients, and shutting down.
pub struct BookstoreSystem {
    pub inventory_client: InventoryClient,
    pub config: BookstoreConfig,
    handle: tokio::task::JoinHandle<Inventory>,
}

impl BookstoreSystem {
    pub fn new(config: BookstoreConfig) -> Self {
        info!(?config, "Starting bookstore system");
        let (service, inventory_client) = InventoryService::new(config.channel_buffer, Inventory::new());
        let handle = tokio::spawn(service.run());

        Self {
            inventory_client,
            config,
            handle,
        }
    }

    /// Drops the system's client and waits for the service to drain.
    ///
    /// Clones of the client held elsewhere keep the service alive, so they must
    /// be dropped before calling this.
    pub async fn shutdown(self) -> Result<Inventory, String> {
        info!("Shutting down system...");
        drop(self.inventory_client);

        match self.handle.await {
            Ok(inventory) => {
                info!(remaining = inventory.len(), "System shutdown complete.");
                Ok(inventory)
            }
            Err(e) => {
                error!("Inventory task failed: {:?}", e);
                Err(format!("Inventory task failed: {:?}", e))
            }
        }
    }
}
