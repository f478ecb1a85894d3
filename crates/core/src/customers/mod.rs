//! Customers module - domain models, ingestion, and services.

mod csv_parser;
mod customers_ingest;
mod customers_mapping;
mod customers_model;
mod customers_service;
mod customers_traits;

// Re-export the public interface
pub use csv_parser::{parse_sheet, ParsedSheet};
pub use customers_ingest::ingest_customers;
pub use customers_mapping::{CustomerField, FieldMapOverrides, FieldMapping};
pub use customers_model::{
    Customer, CustomerUpdate, DelinquencyBucket, LoanHealth, PrsSchedule, SegmentFlag,
};
pub use customers_service::CustomerService;
pub use customers_traits::{CustomerServiceTrait, FieldMapRepositoryTrait};
