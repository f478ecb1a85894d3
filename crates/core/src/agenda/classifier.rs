//! The follow-up classifier.
//!
//! A pure function of (customers, config, today). Each customer is run
//! through three independent branches — due date, PRS meeting, winback —
//! and may contribute up to one item per branch. Items are then globally
//! ordered by category rank with a stable sort, so equal-rank items keep
//! the customer list's order and two passes over identical input produce
//! identical output.
//!
//! Failure semantics are fail-open-by-omission: a date that did not parse
//! at ingestion is `None` here and silently disables only the branch that
//! needed it. The classifier never returns an error.

use chrono::{Datelike, NaiveDate};

use crate::agenda::agenda_model::{AgendaCategory, AgendaConfig, FollowUp, FollowUpKind};
use crate::customers::{Customer, DelinquencyBucket, PrsSchedule, SegmentFlag};
use crate::utils::dates::{days_until, month_with_lookahead, resolve_day_of_month};

/// Classifies the full customer list into a prioritized agenda.
pub fn classify(customers: &[Customer], config: &AgendaConfig, today: NaiveDate) -> Vec<FollowUp> {
    let mut items: Vec<FollowUp> = Vec::new();
    for customer in customers {
        if let Some(item) = due_date_item(customer, config, today) {
            items.push(item);
        }
        if let Some(item) = prs_item(customer, config, today) {
            items.push(item);
        }
        if let Some(item) = winback_item(customer, today) {
            items.push(item);
        }
    }
    items.sort_by_key(|item| item.category.rank());
    items
}

/// Due-date branch: collections, lantakur, or the refinancing window.
///
/// The outcomes are mutually exclusive by construction — delinquency is
/// checked first, lantakur only for non-delinquent customers, and the
/// refinancing window only when neither applies.
fn due_date_item(customer: &Customer, config: &AgendaConfig, today: NaiveDate) -> Option<FollowUp> {
    let due_date = customer.due_date?;

    if customer.is_delinquent() {
        return match customer.delinquency_bucket {
            Some(DelinquencyBucket::Ctx) => Some(follow_up(
                customer,
                FollowUpKind::Payment,
                AgendaCategory::CollectionCtx,
                customer.dpd,
                None,
            )),
            Some(bucket) if bucket.is_secondary() => Some(follow_up(
                customer,
                FollowUpKind::Payment,
                AgendaCategory::CollectionEx,
                customer.dpd,
                None,
            )),
            // Delinquent without a routable bucket: no collections queue
            // to put it in, and the healthy-customer branches don't apply.
            _ => None,
        };
    }

    if customer.has_lantakur {
        return Some(follow_up(
            customer,
            FollowUpKind::Payment,
            AgendaCategory::Lantakur,
            0,
            None,
        ));
    }

    // Refinancing window. Inactive and already-paid-off customers are not
    // candidates for a renewal offer.
    if matches!(customer.segment, SegmentFlag::Inactive | SegmentFlag::PaidOff) {
        return None;
    }

    let current_month = (today.month(), today.year());
    let lookahead_month = month_with_lookahead(today, config.refinancing_lookahead_months);
    let due_month = (due_date.month(), due_date.year());
    let in_current = due_month == current_month;
    let in_lookahead = (due_month.0, due_month.1) == lookahead_month;
    if !in_current && !in_lookahead {
        return None;
    }

    let diff_days = days_until(today, due_date);
    let category = if diff_days == 0 {
        AgendaCategory::Today
    } else if diff_days == 1 {
        AgendaCategory::Soon
    } else if in_current {
        AgendaCategory::ThisMonth
    } else {
        AgendaCategory::NextMonth
    };
    Some(follow_up(
        customer,
        FollowUpKind::Payment,
        category,
        0,
        Some(diff_days),
    ))
}

/// PRS branch: reminder when the next group meeting is within the
/// configured threshold, today and the threshold day both inclusive.
fn prs_item(customer: &Customer, config: &AgendaConfig, today: NaiveDate) -> Option<FollowUp> {
    if customer.segment == SegmentFlag::Inactive {
        return None;
    }
    let meeting_date = match customer.prs_schedule? {
        PrsSchedule::DayOfMonth(day) => resolve_day_of_month(today, day)?,
        PrsSchedule::Date(date) => date,
    };
    let diff_days = days_until(today, meeting_date);
    if (0..=config.prs_threshold_days).contains(&diff_days) {
        Some(follow_up(
            customer,
            FollowUpKind::Prs,
            AgendaCategory::Soon,
            0,
            Some(diff_days),
        ))
    } else {
        None
    }
}

/// Winback branch: re-engagement of exited customers, between one month
/// and one year after payoff. Outside that window the contact is either
/// too fresh to be meaningful or too stale to re-approach.
fn winback_item(customer: &Customer, today: NaiveDate) -> Option<FollowUp> {
    let payoff_date = customer.payoff_date?;
    if !customer.segment.is_exited() {
        return None;
    }
    let months_ago = crate::utils::dates::months_between(payoff_date, today);
    let category = if (1..3).contains(&months_ago) {
        AgendaCategory::WinbackRecent
    } else if (3..=12).contains(&months_ago) {
        AgendaCategory::WinbackOld
    } else {
        return None;
    };
    Some(follow_up(customer, FollowUpKind::Winback, category, 0, None))
}

fn follow_up(
    customer: &Customer,
    kind: FollowUpKind,
    category: AgendaCategory,
    urgency: i64,
    days_left: Option<i64>,
) -> FollowUp {
    FollowUp {
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        kind,
        category,
        urgency,
        days_left,
    }
}
