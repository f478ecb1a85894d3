//! Sentra Sheets Crate
//!
//! The spreadsheet is the read-mostly system of record for customers and
//! daily plans. This crate owns the two wire paths to it:
//!
//! - **Reads**: HTTP GET against the public CSV-export URL of a sheet tab,
//!   cache-busted per request, with a single automatic retry. The raw CSV
//!   text is returned as-is; parsing and field mapping live in `sentra-core`.
//! - **Writes**: HTTP POST of a `{ "action": …, …payload }` JSON envelope to
//!   a user-supplied webhook endpoint. The response status is awaited and a
//!   non-2xx is an error; there is no fire-and-forget path.
//!
//! # Core Types
//!
//! - [`SheetFetcher`] / [`CsvExportClient`] - tab reads
//! - [`SheetWriter`] / [`WebhookWriter`] - envelope writes
//! - [`SheetError`] - error taxonomy with a `retryable()` classification

pub mod errors;
pub mod fetcher;
pub mod webhook;

pub use errors::SheetError;
pub use fetcher::{CsvExportClient, SheetFetcher, SheetTab};
pub use webhook::{SheetWriter, WebhookWriter};
