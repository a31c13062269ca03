// Library exports for testing
pub mod api;
pub mod config;
pub mod docs;
pub mod errors;
pub mod metrics;
pub mod portfolio;
