//! Customer domain models.
//!
//! Spreadsheet tag columns (`flag`, `status`, `flag menunggak`) are free
//! text. They are classified once here, at ingestion, into closed enums;
//! the classifier and the message-strategy builder both consume the enums
//! and never repeat substring checks. The raw strings are kept on the
//! record for template substitution.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer segment derived from the free-text `flag` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentFlag {
    #[default]
    Active,
    Gold,
    Inactive,
    /// Loan fully repaid ("lunas").
    PaidOff,
    /// Exited the program ("DO" / "drop out").
    DropOut,
    Other,
}

impl SegmentFlag {
    /// Classifies the raw `flag` text.
    ///
    /// "inactive" is checked before "active" since the former contains the
    /// latter. "DO" only matches as a whole token; a bare substring would
    /// fire on half the Indonesian dictionary.
    pub fn from_raw(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            return SegmentFlag::Other;
        }
        if lower.contains("inactive") || lower.contains("tidak aktif") {
            SegmentFlag::Inactive
        } else if lower.contains("lunas") {
            SegmentFlag::PaidOff
        } else if lower == "do" || lower.contains("drop") {
            SegmentFlag::DropOut
        } else if lower.contains("gold") {
            SegmentFlag::Gold
        } else if lower.contains("active") || lower.contains("aktif") {
            SegmentFlag::Active
        } else {
            SegmentFlag::Other
        }
    }

    /// Whether this segment is eligible for winback outreach.
    pub fn is_exited(&self) -> bool {
        matches!(self, SegmentFlag::PaidOff | SegmentFlag::DropOut)
    }
}

/// Loan health derived from the free-text `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanHealth {
    Current,
    /// Status text contains "macet" or "menunggak".
    Delinquent,
    #[default]
    Unknown,
}

impl LoanHealth {
    pub fn from_raw(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            LoanHealth::Unknown
        } else if lower.contains("macet") || lower.contains("menunggak") {
            LoanHealth::Delinquent
        } else {
            LoanHealth::Current
        }
    }
}

/// Collections bucket derived from the `flag menunggak` column.
///
/// A customer with any bucket at all counts as delinquent; the variant
/// decides which collections queue the follow-up lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelinquencyBucket {
    Ctx,
    Npf,
    Xday,
    Sm,
    Other,
}

impl DelinquencyBucket {
    /// Classifies the raw tag. `None` means the tag column was empty.
    ///
    /// Separators are dropped first so "X-Day" and "x day" both match.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let lower: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        if lower.is_empty() {
            return None;
        }
        if lower.contains("ctx") {
            Some(DelinquencyBucket::Ctx)
        } else if lower.contains("npf") {
            Some(DelinquencyBucket::Npf)
        } else if lower.contains("xday") {
            Some(DelinquencyBucket::Xday)
        } else if lower.contains("sm") {
            Some(DelinquencyBucket::Sm)
        } else if lower.contains("lantakur") {
            // The insufficient-savings warning is not a collections bucket
            // and must not make the customer delinquent.
            None
        } else {
            Some(DelinquencyBucket::Other)
        }
    }

    /// Whether this bucket routes to the secondary/legacy collections queue.
    pub fn is_secondary(&self) -> bool {
        matches!(
            self,
            DelinquencyBucket::Npf | DelinquencyBucket::Xday | DelinquencyBucket::Sm
        )
    }
}

/// The PRS (recurring group meeting) schedule of a customer.
///
/// The sheet column holds either a bare day-of-month for a monthly meeting
/// or a full `DD/MM/YYYY` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum PrsSchedule {
    DayOfMonth(u32),
    Date(NaiveDate),
}

/// Domain model representing one microfinance customer ("nasabah").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    // Identity
    pub id: String,
    pub name: String,
    pub phone: Option<String>,

    // Typed classification (derived once at ingestion)
    pub segment: SegmentFlag,
    pub loan_health: LoanHealth,
    pub delinquency_bucket: Option<DelinquencyBucket>,
    pub has_lantakur: bool,

    // Raw tag text, kept for template substitution
    pub raw_flag: String,
    pub raw_status: String,
    pub raw_delinquency_tag: String,

    // Dates; unparseable values become None (silent-skip)
    pub due_date: Option<NaiveDate>,
    pub payoff_date: Option<NaiveDate>,
    pub prs_schedule: Option<PrsSchedule>,

    // Financials
    pub outstanding: Decimal,
    pub plafond: Decimal,
    pub savings_balance: Decimal,

    // Operational metadata
    pub officer: String,
    pub sentra: String,
    pub dpd: i64,
    pub notes: Option<String>,
}

impl Customer {
    /// Delinquent ⇔ dpd > 0, or the status text says so, or any
    /// collections bucket is set.
    pub fn is_delinquent(&self) -> bool {
        self.dpd > 0
            || self.loan_health == LoanHealth::Delinquent
            || self.delinquency_bucket.is_some()
    }
}

/// Fields an officer may edit and push back to the spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub flag: Option<String>,
    pub status: Option<String>,
    pub sentra: Option<String>,
    pub notes: Option<String>,
}
