//! In-memory portfolio store standing in for the persistence layer

pub mod models;
pub mod store;

pub use models::{Application, NewApplication, NewTechnology, Technology};
pub use store::{PortfolioStore, StoreError};
