use std::fmt;

use crate::delivery::Courier;
use crate::error::{BookstoreError, BookstoreResult};

/// Variant-specific payload of a [`Book`].
#[derive(Debug, Clone, PartialEq)]
pub enum BookKind {
    /// Physical copy, shipped to a postal address.
    Paper { stock: u32 },
    /// Digital copy, emailed to the buyer.
    EBook { file_type: String },
    /// Display-only copy. Never sold.
    Showcase,
}

impl fmt::Display for BookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookKind::Paper { .. } => write!(f, "paper"),
            BookKind::EBook { .. } => write!(f, "ebook"),
            BookKind::Showcase => write!(f, "showcase"),
        }
    }
}

/// A catalog entry held by the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    isbn: String,
    title: String,
    publish_year: i32,
    price: f64,
    author: String,
    kind: BookKind,
}

impl Book {
    /// Creates a book of any kind.
    ///
    /// # Errors
    /// Returns [`BookstoreError::InvalidPrice`] if `price` is negative or not finite.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        publish_year: i32,
        price: f64,
        author: impl Into<String>,
        kind: BookKind,
    ) -> BookstoreResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(BookstoreError::InvalidPrice(price));
        }
        Ok(Self {
            isbn: isbn.into(),
            title: title.into(),
            publish_year,
            price,
            author: author.into(),
            kind,
        })
    }

    pub fn paper(
        isbn: impl Into<String>,
        title: impl Into<String>,
        publish_year: i32,
        price: f64,
        author: impl Into<String>,
        stock: u32,
    ) -> BookstoreResult<Self> {
        Self::new(isbn, title, publish_year, price, author, BookKind::Paper { stock })
    }

    pub fn ebook(
        isbn: impl Into<String>,
        title: impl Into<String>,
        publish_year: i32,
        price: f64,
        author: impl Into<String>,
        file_type: impl Into<String>,
    ) -> BookstoreResult<Self> {
        let kind = BookKind::EBook { file_type: file_type.into() };
        Self::new(isbn, title, publish_year, price, author, kind)
    }

    pub fn showcase(
        isbn: impl Into<String>,
        title: impl Into<String>,
        publish_year: i32,
        price: f64,
        author: impl Into<String>,
    ) -> BookstoreResult<Self> {
        Self::new(isbn, title, publish_year, price, author, BookKind::Showcase)
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publish_year(&self) -> i32 {
        self.publish_year
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    /// Remaining stock for paper books, `None` for kinds without stock.
    pub fn stock(&self) -> Option<u32> {
        match self.kind {
            BookKind::Paper { stock } => Some(stock),
            _ => None,
        }
    }

    pub fn file_type(&self) -> Option<&str> {
        match &self.kind {
            BookKind::EBook { file_type } => Some(file_type),
            _ => None,
        }
    }

    /// Years elapsed between publication and `current_year`.
    pub fn age(&self, current_year: i32) -> i64 {
        i64::from(current_year) - i64::from(self.publish_year)
    }

    pub fn is_purchasable(&self) -> bool {
        !matches!(self.kind, BookKind::Showcase)
    }

    /// Removes `quantity` copies from stock.
    ///
    /// Kinds without stock accept any quantity unchanged.
    ///
    /// # Errors
    /// Fails with [`BookstoreError::InsufficientStock`] when a paper book holds fewer
    /// than `quantity` copies. Stock is left untouched in that case.
    pub fn reduce_stock(&mut self, quantity: u32) -> BookstoreResult<()> {
        if let BookKind::Paper { stock } = &mut self.kind {
            if *stock < quantity {
                return Err(BookstoreError::InsufficientStock {
                    requested: quantity,
                    available: *stock,
                });
            }
            *stock -= quantity;
        }
        Ok(())
    }

    /// Hands one copy to the courier.
    ///
    /// Paper books are shipped to `address`, ebooks are emailed to `email`.
    /// Only one destination is used per kind.
    pub fn deliver(&self, email: &str, address: &str, courier: &mut dyn Courier) -> BookstoreResult<()> {
        match &self.kind {
            BookKind::Paper { .. } => courier.ship(self, address),
            BookKind::EBook { .. } => courier.email(self, email),
            BookKind::Showcase => return Err(BookstoreError::UnsupportedDelivery(self.isbn.clone())),
        }
        Ok(())
    }
}
