//! Fulfilment side effects for sold copies.
//!
//! The inventory never ships or emails anything itself: it hands each sold copy
//! to a [`Courier`]. [`TracingCourier`] emits one log event per copy and is what
//! the running system uses.

use tracing::info;
use crate::domain::Book;

/// Destination-specific delivery of a single copy.
pub trait Courier: Send {
    fn ship(&mut self, book: &Book, address: &str);
    fn email(&mut self, book: &Book, email: &str);
}

/// Emits a structured log line for every delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCourier;

impl Courier for TracingCourier {
    fn ship(&mut self, book: &Book, address: &str) {
        info!(isbn = %book.isbn(), address = %address, "Shipping paper book to {}", address);
    }

    fn email(&mut self, book: &Book, email: &str) {
        let file_type = book.file_type().unwrap_or("unknown");
        info!(isbn = %book.isbn(), email = %email, file_type, "Emailing ebook to {}", email);
    }
}

/// A delivery as observed by a [`RecordingCourier`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Shipped { isbn: String, address: String },
    Emailed { isbn: String, email: String },
}

/// Keeps every delivery in order of arrival.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingCourier {
    deliveries: Vec<Delivery>,
}

#[cfg(test)]
impl RecordingCourier {
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

#[cfg(test)]
impl Courier for RecordingCourier {
    fn ship(&mut self, book: &Book, address: &str) {
        self.deliveries.push(Delivery::Shipped {
            isbn: book.isbn().to_string(),
            address: address.to_string(),
        });
    }

    fn email(&mut self, book: &Book, email: &str) {
        self.deliveries.push(Delivery::Emailed {
            isbn: book.isbn().to_string(),
            email: email.to_string(),
        });
    }
}
