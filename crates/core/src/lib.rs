//! Sentra Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Sentra CRM.
//! It is transport-agnostic: repository and fetcher traits defined here
//! are implemented by the `sentra-backend` and `sentra-sheets` crates.

pub mod agenda;
pub mod analytics;
pub mod compose;
pub mod constants;
pub mod customers;
pub mod errors;
pub mod plans;
pub mod settings;
pub mod templates;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
