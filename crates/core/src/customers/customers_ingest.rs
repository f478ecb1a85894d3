//! Row-to-domain ingestion for the customer sheet.

use crate::customers::csv_parser::ParsedSheet;
use crate::customers::customers_mapping::{CustomerField, FieldMapping};
use crate::customers::customers_model::{
    Customer, DelinquencyBucket, LoanHealth, PrsSchedule, SegmentFlag,
};
use crate::utils::dates::parse_dmy;
use crate::utils::money::parse_currency_tolerant;

/// Builds the customer list from a parsed sheet.
///
/// Rows without a name are not valid customers and are dropped. Every
/// other per-record problem degrades to an absent field: bad dates become
/// `None`, bad numbers become zero. Ingestion never fails on data.
pub fn ingest_customers(sheet: &ParsedSheet, mapping: &FieldMapping) -> Vec<Customer> {
    let columns = mapping.resolve(&sheet.headers);
    let cell = |row: &[String], field: CustomerField| -> String {
        columns
            .get(&field)
            .and_then(|&i| row.get(i))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    let mut customers = Vec::with_capacity(sheet.rows.len());
    for (index, row) in sheet.rows.iter().enumerate() {
        let name = cell(row, CustomerField::Name);
        if name.is_empty() {
            continue;
        }

        let raw_flag = cell(row, CustomerField::Flag);
        let raw_status = cell(row, CustomerField::Status);
        let raw_delinquency_tag = cell(row, CustomerField::DelinquencyTag);

        let id = {
            let raw = cell(row, CustomerField::Id);
            if raw.is_empty() {
                // Sheets without an id column still need a stable handle
                // within one load.
                format!("row-{}", index + 1)
            } else {
                raw
            }
        };

        let phone = {
            let raw = cell(row, CustomerField::Phone);
            if raw.is_empty() { None } else { Some(raw) }
        };

        let notes = {
            let raw = cell(row, CustomerField::Notes);
            if raw.is_empty() { None } else { Some(raw) }
        };

        customers.push(Customer {
            id,
            name,
            phone,
            segment: SegmentFlag::from_raw(&raw_flag),
            loan_health: LoanHealth::from_raw(&raw_status),
            delinquency_bucket: DelinquencyBucket::from_raw(&raw_delinquency_tag),
            has_lantakur: has_lantakur_tag(&raw_flag, &raw_delinquency_tag),
            due_date: parse_dmy(&cell(row, CustomerField::DueDate)),
            payoff_date: parse_dmy(&cell(row, CustomerField::PayoffDate)),
            prs_schedule: parse_prs(&cell(row, CustomerField::PrsDate)),
            outstanding: parse_currency_tolerant(&cell(row, CustomerField::Outstanding)),
            plafond: parse_currency_tolerant(&cell(row, CustomerField::Plafond)),
            savings_balance: parse_currency_tolerant(&cell(row, CustomerField::Savings)),
            officer: cell(row, CustomerField::Officer),
            sentra: cell(row, CustomerField::Sentra),
            dpd: cell(row, CustomerField::Dpd).parse().unwrap_or(0),
            raw_flag,
            raw_status,
            raw_delinquency_tag,
            notes,
        });
    }
    customers
}

/// The insufficient-savings warning rides on either tag column.
fn has_lantakur_tag(raw_flag: &str, raw_delinquency_tag: &str) -> bool {
    raw_flag.to_lowercase().contains("lantakur")
        || raw_delinquency_tag.to_lowercase().contains("lantakur")
}

/// A bare 1–2 digit value is a recurring day-of-month; anything else must
/// parse as a full `DD/MM/YYYY` date or the schedule is absent.
fn parse_prs(raw: &str) -> Option<PrsSchedule> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() <= 2 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let day: u32 = trimmed.parse().ok()?;
        return Some(PrsSchedule::DayOfMonth(day));
    }
    parse_dmy(trimmed).map(PrsSchedule::Date)
}
