//! System orchestration, configuration, startup, and shutdown logic.

pub mod bookstore_system;
pub mod config;
pub mod tracing;

pub use bookstore_system::*;
pub use config::*;
pub use self::tracing::*;
