use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::json;

use sentra_sheets::{SheetFetcher, SheetTab, SheetWriter};

use crate::customers::csv_parser::parse_sheet;
use crate::customers::customers_ingest::ingest_customers;
use crate::customers::customers_mapping::FieldMapping;
use crate::customers::customers_model::{Customer, CustomerUpdate};
use crate::customers::{CustomerServiceTrait, FieldMapRepositoryTrait};
use crate::errors::ValidationError;
use crate::Result;

/// Service for loading customers from the sheet and pushing edits back.
pub struct CustomerService {
    fetcher: Arc<dyn SheetFetcher>,
    writer: Arc<dyn SheetWriter>,
    field_map_repository: Arc<dyn FieldMapRepositoryTrait>,
    customer_tab: SheetTab,
}

impl CustomerService {
    pub fn new(
        fetcher: Arc<dyn SheetFetcher>,
        writer: Arc<dyn SheetWriter>,
        field_map_repository: Arc<dyn FieldMapRepositoryTrait>,
        customer_tab: SheetTab,
    ) -> Self {
        Self {
            fetcher,
            writer,
            field_map_repository,
            customer_tab,
        }
    }

    /// The effective mapping: backend overrides when reachable, built-in
    /// defaults otherwise. A backend failure here must not take the
    /// customer list down with it.
    async fn effective_mapping(&self) -> FieldMapping {
        match self.field_map_repository.get_field_map().await {
            Ok(Some(overrides)) => FieldMapping::with_overrides(&overrides),
            Ok(None) => FieldMapping::default(),
            Err(e) => {
                warn!("Field map unavailable, using defaults: {}", e);
                FieldMapping::default()
            }
        }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn load_customers(&self) -> Result<Vec<Customer>> {
        let csv_text = self.fetcher.fetch_tab(&self.customer_tab).await?;
        let sheet = parse_sheet(&csv_text)?;
        let mapping = self.effective_mapping().await;
        let customers = ingest_customers(&sheet, &mapping);
        debug!(
            "Ingested {} customers from {} rows",
            customers.len(),
            sheet.rows.len()
        );
        Ok(customers)
    }

    async fn push_customer(&self, update: &CustomerUpdate) -> Result<()> {
        if update.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        self.writer
            .post("updateCustomer", json!({ "customer": update }))
            .await?;
        Ok(())
    }
}
