//! Repository and service traits for customers.

use async_trait::async_trait;

use crate::customers::customers_mapping::FieldMapOverrides;
use crate::customers::customers_model::{Customer, CustomerUpdate};
use crate::errors::Result;

/// Repository trait for the per-tenant header-keyword overrides held on
/// the managed backend.
#[async_trait]
pub trait FieldMapRepositoryTrait: Send + Sync {
    /// Get the stored overrides, or `None` when the tenant has none.
    async fn get_field_map(&self) -> Result<Option<FieldMapOverrides>>;

    /// Replace the stored overrides wholesale.
    async fn put_field_map(&self, overrides: &FieldMapOverrides) -> Result<()>;
}

/// Service trait for loading and syncing customers.
#[async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    /// Fetches the customer tab and ingests it into domain records.
    async fn load_customers(&self) -> Result<Vec<Customer>>;

    /// Pushes an officer's edit back to the spreadsheet via webhook.
    async fn push_customer(&self, update: &CustomerUpdate) -> Result<()>;
}
