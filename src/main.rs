mod domain;
mod delivery;
mod error;
mod inventory;
mod messages;
mod clients;
mod actors;
mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, BookstoreConfig, BookstoreSystem};
use crate::clients::InventoryClient;
use crate::domain::Book;

const BUYER_EMAIL: &str = "reham@example.com";
const BUYER_ADDRESS: &str = "Smart Village";

async fn log_catalog(client: &InventoryClient) -> Result<(), String> {
    let entries = client.list_books().await.map_err(|e| e.to_string())?;
    for entry in entries {
        info!(title = %entry.title, author = %entry.author, "{} by {}", entry.title, entry.author);
    }
    Ok(())
}

async fn buy(client: &InventoryClient, isbn: &str, quantity: u32) {
    let result = client
        .buy_book(isbn.to_string(), quantity, BUYER_EMAIL.to_string(), BUYER_ADDRESS.to_string())
        .await;
    match result {
        Ok(paid) => info!(isbn, quantity, paid, "Paid: {}", paid),
        Err(e) => error!(isbn, quantity, error = %e, "Purchase rejected"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = BookstoreConfig::from_env();
    let system = BookstoreSystem::new(config);
    let client = system.inventory_client.clone();

    let books = [
        Book::paper("123", "Java Basics", 2020, 150.0, "Reham Ayad", 5),
        Book::ebook("456", "Learn Angular", 2022, 100.0, "Ahmed Ali", "PDF"),
        Book::showcase("789", "Fawry Systems", 2019, 200.0, "Fawry Team"),
    ];

    let span = tracing::info_span!("stocking");
    async {
        for book in books {
            let book = book.map_err(|e| e.to_string())?;
            client.add_book(book).await.map_err(|e| e.to_string())?;
        }
        log_catalog(&client).await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("sales");
    async {
        buy(&client, "123", 2).await;
        buy(&client, "456", 1).await;
        buy(&client, "789", 1).await;

        let remaining = client.get_book("123".to_string()).await.map_err(|e| e.to_string())?;
        if let Some(stock) = remaining.as_ref().and_then(Book::stock) {
            info!(isbn = "123", stock, "Remaining stock");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let outdated_after_years = system.config.outdated_after_years;
    let span = tracing::info_span!("maintenance");
    async {
        let removed = client
            .remove_outdated_books(outdated_after_years)
            .await
            .map_err(|e| e.to_string())?;
        info!(removed = removed.len(), years = outdated_after_years, "Removed outdated books");
        log_catalog(&client).await
    }
    .instrument(span)
    .await?;

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
