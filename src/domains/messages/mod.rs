//! Messages and the in-memory store that holds them.

pub mod models;
pub mod store;

pub use models::*;
pub use store::*;
