//! Client handles for the services started by [`BookstoreSystem`](crate::app_system::BookstoreSystem).

#[macro_use]
mod macros;
pub mod inventory_client;

pub use inventory_client::*;
