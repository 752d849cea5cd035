pub mod book;
pub mod catalog;

pub use book::*;
pub use catalog::*;
