//! Analytics module - derived portfolio summaries.

mod analytics_model;
mod analytics_service;

// Re-export the public interface
pub use analytics_model::{BucketBreakdown, CategoryCount, PortfolioSummary, SegmentBreakdown};
pub use analytics_service::{summarize, AnalyticsService, AnalyticsServiceTrait};
