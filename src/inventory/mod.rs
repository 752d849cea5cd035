//! The synchronous inventory store and its purchase rules.

pub mod store;

pub use store::*;
