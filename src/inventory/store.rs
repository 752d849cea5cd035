use std::collections::HashMap;

use chrono::{Datelike, Local};
use tracing::{debug, info, instrument};

use crate::delivery::{Courier, TracingCourier};
use crate::domain::{Book, CatalogEntry};
use crate::error::{BookstoreError, BookstoreResult};

/// In-memory catalog keyed by ISBN.
///
/// The inventory owns every registered book; mutation goes through `&mut self`,
/// so a single owner serializes all access.
pub struct Inventory<C: Courier = TracingCourier> {
    books: HashMap<String, Book>,
    courier: C,
}

impl Default for Inventory<TracingCourier> {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory<TracingCourier> {
    pub fn new() -> Self {
        Self::with_courier(TracingCourier)
    }
}

impl<C: Courier> Inventory<C> {
    pub fn with_courier(courier: C) -> Self {
        Self {
            books: HashMap::new(),
            courier,
        }
    }

    #[cfg(test)]
    pub fn courier(&self) -> &C {
        &self.courier
    }

    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Registers a book, replacing any entry with the same ISBN.
    #[instrument(skip(self, book), fields(isbn = %book.isbn(), kind = %book.kind()))]
    pub fn add_book(&mut self, book: Book) -> Option<Book> {
        let replaced = self.books.insert(book.isbn().to_string(), book);
        if replaced.is_some() {
            debug!("Replaced existing entry");
        }
        replaced
    }

    #[instrument(skip(self))]
    pub fn remove_book(&mut self, isbn: &str) -> Option<Book> {
        let removed = self.books.remove(isbn);
        if removed.is_none() {
            debug!("Nothing to remove");
        }
        removed
    }

    /// Evicts every book older than `years_limit`, measured against the local
    /// calendar year at the time of the call.
    pub fn remove_outdated_books(&mut self, years_limit: u32) -> Vec<Book> {
        self.remove_outdated_books_as_of(years_limit, Local::now().year())
    }

    /// Evicts every book whose age in `current_year` exceeds `years_limit`.
    #[instrument(skip(self))]
    pub fn remove_outdated_books_as_of(&mut self, years_limit: u32, current_year: i32) -> Vec<Book> {
        let outdated: Vec<String> = self
            .books
            .values()
            .filter(|book| book.age(current_year) > i64::from(years_limit))
            .map(|book| book.isbn().to_string())
            .collect();

        let removed: Vec<Book> = outdated
            .iter()
            .filter_map(|isbn| self.books.remove(isbn))
            .collect();

        for book in &removed {
            info!(
                isbn = %book.isbn(),
                title = %book.title(),
                publish_year = book.publish_year(),
                "Removed outdated book"
            );
        }
        removed
    }

    /// Sells `quantity` copies and returns the amount charged.
    ///
    /// Stock is reserved before anything is delivered, so a failed purchase
    /// leaves the inventory unchanged and triggers no delivery. Each sold copy
    /// is delivered separately.
    ///
    /// # Errors
    /// - [`BookstoreError::NotFound`] if no book has this ISBN
    /// - [`BookstoreError::NotPurchasable`] for showcase books
    /// - [`BookstoreError::InsufficientStock`] if a paper book has fewer copies than requested
    #[instrument(skip(self, email, address))]
    pub fn buy_book(&mut self, isbn: &str, quantity: u32, email: &str, address: &str) -> BookstoreResult<f64> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| BookstoreError::NotFound(isbn.to_string()))?;

        if !book.is_purchasable() {
            debug!("Book is not for sale");
            return Err(BookstoreError::NotPurchasable(isbn.to_string()));
        }

        book.reduce_stock(quantity)?;

        let total = book.price() * f64::from(quantity);

        for _ in 0..quantity {
            book.deliver(email, address, &mut self.courier)?;
        }

        info!(total, "Purchase completed");
        Ok(total)
    }

    /// Title and author of every registered book, in no particular order.
    pub fn list_books(&self) -> Vec<CatalogEntry> {
        self.books.values().map(CatalogEntry::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{Delivery, RecordingCourier};
    use proptest::prelude::*;

    fn sample_inventory() -> Inventory<RecordingCourier> {
        let mut inventory = Inventory::with_courier(RecordingCourier::default());
        inventory.add_book(Book::paper("123", "Java Basics", 2020, 150.0, "Reham Ayad", 5).unwrap());
        inventory.add_book(Book::ebook("456", "Learn Angular", 2022, 100.0, "Ahmed Ali", "PDF").unwrap());
        inventory.add_book(Book::showcase("789", "Fawry Systems", 2019, 200.0, "Fawry Team").unwrap());
        inventory
    }

    #[test]
    fn test_add_book_replaces_same_isbn() {
        let mut inventory = sample_inventory();
        let replacement = Book::paper("123", "Java Advanced", 2021, 90.0, "Reham Ayad", 1).unwrap();

        let previous = inventory.add_book(replacement).unwrap();

        assert_eq!(previous.title(), "Java Basics");
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.get("123").unwrap().title(), "Java Advanced");
    }

    #[test]
    fn test_buy_paper_book() {
        let mut inventory = sample_inventory();

        let total = inventory.buy_book("123", 2, "reham@example.com", "Smart Village").unwrap();

        assert_eq!(total, 300.0);
        assert_eq!(inventory.get("123").unwrap().stock(), Some(3));
        let shipped = Delivery::Shipped { isbn: "123".into(), address: "Smart Village".into() };
        assert_eq!(inventory.courier().deliveries(), &[shipped.clone(), shipped]);
    }

    #[test]
    fn test_buy_ebook() {
        let mut inventory = sample_inventory();

        let total = inventory.buy_book("456", 1, "reham@example.com", "Smart Village").unwrap();

        assert_eq!(total, 100.0);
        assert_eq!(
            inventory.courier().deliveries(),
            &[Delivery::Emailed { isbn: "456".into(), email: "reham@example.com".into() }]
        );
    }

    #[test]
    fn test_buy_showcase_book_is_rejected() {
        let mut inventory = sample_inventory();
        let before: Vec<Book> = ["123", "456", "789"]
            .iter()
            .map(|isbn| inventory.get(isbn).unwrap().clone())
            .collect();

        for quantity in [0, 1, 7, 10_000] {
            let err = inventory.buy_book("789", quantity, "reham@example.com", "Smart Village").unwrap_err();
            assert_eq!(err, BookstoreError::NotPurchasable("789".into()));
        }

        for book in before {
            assert_eq!(inventory.get(book.isbn()), Some(&book));
        }
        assert!(inventory.courier().deliveries().is_empty());
    }

    #[test]
    fn test_buy_unknown_book() {
        let mut inventory = sample_inventory();
        let err = inventory.buy_book("000", 1, "a@example.com", "Nowhere").unwrap_err();
        assert_eq!(err, BookstoreError::NotFound("000".into()));
    }

    #[test]
    fn test_insufficient_stock_has_no_side_effects() {
        let mut inventory = sample_inventory();

        let err = inventory.buy_book("123", 6, "a@example.com", "Nowhere").unwrap_err();

        assert_eq!(err, BookstoreError::InsufficientStock { requested: 6, available: 5 });
        assert_eq!(inventory.get("123").unwrap().stock(), Some(5));
        assert!(inventory.courier().deliveries().is_empty());
    }

    #[test]
    fn test_buy_zero_copies() {
        let mut inventory = sample_inventory();
        let total = inventory.buy_book("123", 0, "a@example.com", "Nowhere").unwrap();
        assert_eq!(total, 0.0);
        assert_eq!(inventory.get("123").unwrap().stock(), Some(5));
        assert!(inventory.courier().deliveries().is_empty());
    }

    #[test]
    fn test_remove_outdated_books() {
        let mut inventory = sample_inventory();

        let removed = inventory.remove_outdated_books_as_of(4, 2025);

        let mut removed: Vec<&str> = removed.iter().map(Book::isbn).collect();
        removed.sort();
        assert_eq!(removed, vec!["123", "789"]);
        assert!(inventory.get("123").is_none());
        assert!(inventory.get("456").is_some());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_remove_outdated_books_boundary() {
        let mut inventory = sample_inventory();
        // 2024 - 2020 == 4 is not older than the limit
        let removed = inventory.remove_outdated_books_as_of(4, 2024);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].isbn(), "789");
        assert!(inventory.get("123").is_some());
        assert!(inventory.get("456").is_some());
    }

    #[test]
    fn test_remove_outdated_books_uses_wall_clock() {
        let mut inventory = sample_inventory();
        let current_year = Local::now().year();
        inventory.add_book(Book::showcase("new", "Fresh", current_year, 1.0, "X").unwrap());

        inventory.remove_outdated_books(0);

        assert_eq!(inventory.len(), 1);
        assert!(inventory.get("new").is_some());
    }

    #[test]
    fn test_remove_book() {
        let mut inventory = sample_inventory();
        assert_eq!(inventory.remove_book("456").unwrap().title(), "Learn Angular");
        assert!(inventory.remove_book("456").is_none());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_list_books() {
        let inventory = sample_inventory();
        let mut titles: Vec<String> = inventory.list_books().into_iter().map(|entry| entry.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["Fawry Systems", "Java Basics", "Learn Angular"]);
    }

    proptest! {
        #[test]
        fn prop_purchase_within_stock(stock in 0u32..500, quantity in 0u32..500, price in 0.0f64..1_000.0) {
            let mut inventory = Inventory::with_courier(RecordingCourier::default());
            inventory.add_book(Book::paper("p", "Prop", 2020, price, "Author", stock).unwrap());

            let result = inventory.buy_book("p", quantity, "e", "a");

            if quantity <= stock {
                prop_assert_eq!(result, Ok(price * f64::from(quantity)));
                prop_assert_eq!(inventory.get("p").unwrap().stock(), Some(stock - quantity));
                prop_assert_eq!(inventory.courier().deliveries().len(), quantity as usize);
            } else {
                prop_assert_eq!(result, Err(BookstoreError::InsufficientStock { requested: quantity, available: stock }));
                prop_assert_eq!(inventory.get("p").unwrap().stock(), Some(stock));
                prop_assert!(inventory.courier().deliveries().is_empty());
            }
        }

        #[test]
        fn prop_eviction_is_exact(years in proptest::collection::vec(1950i32..2030, 0..40), limit in 0u32..30, current in 2000i32..2040) {
            let mut inventory = Inventory::with_courier(RecordingCourier::default());
            for (i, year) in years.iter().enumerate() {
                inventory.add_book(Book::showcase(i.to_string(), "T", *year, 1.0, "A").unwrap());
            }

            let removed = inventory.remove_outdated_books_as_of(limit, current);

            for book in &removed {
                prop_assert!(i64::from(current - book.publish_year()) > i64::from(limit));
            }
            for (i, year) in years.iter().enumerate() {
                let outdated = i64::from(current - *year) > i64::from(limit);
                prop_assert_eq!(inventory.get(&i.to_string()).is_none(), outdated);
            }
            prop_assert_eq!(removed.len() + inventory.len(), years.len());
        }
    }
}
