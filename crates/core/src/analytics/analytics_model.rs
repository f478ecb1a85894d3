//! Portfolio analytics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::agenda::AgendaCategory;
use crate::customers::{DelinquencyBucket, SegmentFlag};

/// Count and outstanding amount for one customer segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBreakdown {
    pub segment: SegmentFlag,
    pub customer_count: usize,
    pub outstanding: Decimal,
}

/// Count and outstanding amount for one delinquency bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketBreakdown {
    pub bucket: DelinquencyBucket,
    pub customer_count: usize,
    pub outstanding: Decimal,
}

/// Follow-up count per agenda category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: AgendaCategory,
    pub count: usize,
}

/// The portfolio dashboard payload, derived fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub customer_count: usize,
    pub total_outstanding: Decimal,
    pub total_savings: Decimal,
    pub delinquent_count: usize,
    pub delinquent_outstanding: Decimal,
    /// Share of outstanding that is current, in [0, 1]. 1 when the book
    /// is empty.
    pub collection_rate: Decimal,
    pub segments: Vec<SegmentBreakdown>,
    pub buckets: Vec<BucketBreakdown>,
    pub agenda_counts: Vec<CategoryCount>,
}
