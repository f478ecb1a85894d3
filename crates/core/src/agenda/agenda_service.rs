use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use crate::agenda::agenda_model::{AgendaConfig, FollowUp};
use crate::agenda::classifier::classify;
use crate::customers::CustomerServiceTrait;
use crate::Result;

/// Service trait for producing the officer's agenda.
#[async_trait]
pub trait AgendaServiceTrait: Send + Sync {
    /// Loads the current customer list and classifies it.
    ///
    /// `config` and `today` are passed explicitly so the result is a pure
    /// function of its inputs; callers own the clock and the thresholds.
    async fn build_agenda(&self, config: &AgendaConfig, today: NaiveDate) -> Result<Vec<FollowUp>>;
}

/// Service for building the prioritized follow-up agenda.
pub struct AgendaService {
    customer_service: Arc<dyn CustomerServiceTrait>,
}

impl AgendaService {
    pub fn new(customer_service: Arc<dyn CustomerServiceTrait>) -> Self {
        Self { customer_service }
    }
}

#[async_trait]
impl AgendaServiceTrait for AgendaService {
    async fn build_agenda(&self, config: &AgendaConfig, today: NaiveDate) -> Result<Vec<FollowUp>> {
        let customers = self.customer_service.load_customers().await?;
        let items = classify(&customers, config, today);
        debug!(
            "Classified {} customers into {} follow-ups",
            customers.len(),
            items.len()
        );
        Ok(items)
    }
}
