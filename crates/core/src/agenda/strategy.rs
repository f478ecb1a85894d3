//! Communication strategy for outreach framing.
//!
//! One derivation shared by the agenda views and the AI prompt builder.
//! The two consumers must never drift apart on what "the right tone" is
//! for a customer, so this is the only place the framing is decided.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::agenda::agenda_model::AgendaConfig;
use crate::customers::Customer;
use crate::utils::dates::{month_with_lookahead, months_between};
use chrono::Datelike;

/// Days past due at or below which collections messaging stays soft.
pub const SOFT_COLLECTIONS_DPD: i64 = 3;

/// The framing an outreach message should take for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationStrategy {
    /// Firm payment reminder for established delinquency.
    CollectionsHard,
    /// Gentle nudge within the first few days past due.
    CollectionsSoft,
    /// Savings balance will not cover the upcoming installment.
    SavingsReminder,
    /// Maturity is close: offer renewed financing.
    RefinancingOffer,
    /// Re-engage an exited customer.
    Winback,
    /// Nothing urgent: keep the relationship warm.
    RelationshipKeeping,
}

/// Derives the strategy for one customer.
pub fn derive_strategy(
    customer: &Customer,
    config: &AgendaConfig,
    today: NaiveDate,
) -> CommunicationStrategy {
    if customer.is_delinquent() {
        if customer.dpd <= SOFT_COLLECTIONS_DPD {
            return CommunicationStrategy::CollectionsSoft;
        }
        return CommunicationStrategy::CollectionsHard;
    }

    if customer.has_lantakur {
        return CommunicationStrategy::SavingsReminder;
    }

    if customer.segment.is_exited() {
        if let Some(payoff_date) = customer.payoff_date {
            let months_ago = months_between(payoff_date, today);
            if (1..=12).contains(&months_ago) {
                return CommunicationStrategy::Winback;
            }
        }
        return CommunicationStrategy::RelationshipKeeping;
    }

    if let Some(due_date) = customer.due_date {
        let due_month = (due_date.month(), due_date.year());
        let in_window = due_month == (today.month(), today.year())
            || (due_month.0, due_month.1)
                == month_with_lookahead(today, config.refinancing_lookahead_months);
        if in_window {
            return CommunicationStrategy::RefinancingOffer;
        }
    }

    CommunicationStrategy::RelationshipKeeping
}
