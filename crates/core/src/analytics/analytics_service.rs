use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::agenda::{classify, AgendaConfig, FollowUp};
use crate::analytics::analytics_model::{
    BucketBreakdown, CategoryCount, PortfolioSummary, SegmentBreakdown,
};
use crate::customers::{Customer, CustomerServiceTrait};
use crate::Result;

/// Service trait for portfolio analytics.
#[async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Loads the current book and summarizes it.
    async fn portfolio_summary(
        &self,
        config: &AgendaConfig,
        today: NaiveDate,
    ) -> Result<PortfolioSummary>;
}

/// Service producing the dashboard summaries.
pub struct AnalyticsService {
    customer_service: Arc<dyn CustomerServiceTrait>,
}

impl AnalyticsService {
    pub fn new(customer_service: Arc<dyn CustomerServiceTrait>) -> Self {
        Self { customer_service }
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn portfolio_summary(
        &self,
        config: &AgendaConfig,
        today: NaiveDate,
    ) -> Result<PortfolioSummary> {
        let customers = self.customer_service.load_customers().await?;
        let agenda = classify(&customers, config, today);
        Ok(summarize(&customers, &agenda))
    }
}

/// Pure summary over an already-loaded book and its agenda.
pub fn summarize(customers: &[Customer], agenda: &[FollowUp]) -> PortfolioSummary {
    let mut total_outstanding = Decimal::ZERO;
    let mut total_savings = Decimal::ZERO;
    let mut delinquent_count = 0usize;
    let mut delinquent_outstanding = Decimal::ZERO;

    let mut segments: BTreeMap<String, SegmentBreakdown> = BTreeMap::new();
    let mut buckets: BTreeMap<String, BucketBreakdown> = BTreeMap::new();

    for customer in customers {
        total_outstanding += customer.outstanding;
        total_savings += customer.savings_balance;
        if customer.is_delinquent() {
            delinquent_count += 1;
            delinquent_outstanding += customer.outstanding;
        }

        let segment_entry = segments
            .entry(format!("{:?}", customer.segment))
            .or_insert(SegmentBreakdown {
                segment: customer.segment,
                customer_count: 0,
                outstanding: Decimal::ZERO,
            });
        segment_entry.customer_count += 1;
        segment_entry.outstanding += customer.outstanding;

        if let Some(bucket) = customer.delinquency_bucket {
            let bucket_entry = buckets
                .entry(format!("{:?}", bucket))
                .or_insert(BucketBreakdown {
                    bucket,
                    customer_count: 0,
                    outstanding: Decimal::ZERO,
                });
            bucket_entry.customer_count += 1;
            bucket_entry.outstanding += customer.outstanding;
        }
    }

    let collection_rate = if total_outstanding.is_zero() {
        Decimal::ONE
    } else {
        Decimal::ONE - delinquent_outstanding / total_outstanding
    };

    let mut category_counts: BTreeMap<String, CategoryCount> = BTreeMap::new();
    for item in agenda {
        let entry = category_counts
            .entry(format!("{:?}", item.category))
            .or_insert(CategoryCount {
                category: item.category,
                count: 0,
            });
        entry.count += 1;
    }

    PortfolioSummary {
        customer_count: customers.len(),
        total_outstanding,
        total_savings,
        delinquent_count,
        delinquent_outstanding,
        collection_rate,
        segments: segments.into_values().collect(),
        buckets: buckets.into_values().collect(),
        agenda_counts: category_counts.into_values().collect(),
    }
}
