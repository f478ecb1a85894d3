//! Follow-up (agenda) domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRS_THRESHOLD_DAYS, DEFAULT_REFINANCING_LOOKAHEAD_MONTHS};

/// Classifier thresholds. An explicit value threaded into every
/// classification pass; never ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaConfig {
    /// PRS meetings within this many days (inclusive) produce a reminder.
    pub prs_threshold_days: i64,
    /// How many months ahead of the current month the refinancing window
    /// reaches.
    pub refinancing_lookahead_months: u32,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            prs_threshold_days: DEFAULT_PRS_THRESHOLD_DAYS,
            refinancing_lookahead_months: DEFAULT_REFINANCING_LOOKAHEAD_MONTHS,
        }
    }
}

/// Which branch of the classifier produced a follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FollowUpKind {
    Payment,
    Prs,
    Winback,
}

/// Follow-up category, ordered by action priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgendaCategory {
    CollectionCtx,
    CollectionEx,
    Lantakur,
    Today,
    Soon,
    ThisMonth,
    NextMonth,
    WinbackRecent,
    WinbackOld,
}

impl AgendaCategory {
    /// Sort rank, highest priority first. The four tail categories share a
    /// rank: they are unordered relative to each other, and the stable
    /// sort keeps their input order.
    pub fn rank(&self) -> u8 {
        match self {
            AgendaCategory::CollectionCtx => 0,
            AgendaCategory::CollectionEx => 1,
            AgendaCategory::Lantakur => 2,
            AgendaCategory::Today => 3,
            AgendaCategory::Soon => 4,
            AgendaCategory::ThisMonth
            | AgendaCategory::NextMonth
            | AgendaCategory::WinbackRecent
            | AgendaCategory::WinbackOld => 5,
        }
    }
}

/// One actionable item on the officer's agenda.
///
/// Derived, never persisted: computed fresh on every classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub customer_id: String,
    pub customer_name: String,
    pub kind: FollowUpKind,
    pub category: AgendaCategory,
    /// Days past due for collections items; 0 elsewhere.
    pub urgency: i64,
    /// Days until the driving date, where one exists.
    pub days_left: Option<i64>,
}
