//! Managed-backend repository implementations for Sentra.
//!
//! This crate is the only place in the application that talks to the
//! hosted REST backend. It implements the repository traits defined in
//! `sentra-core` over a PostgREST-style HTTP API:
//! - message templates (with revision-guarded writes)
//! - remote settings overrides
//! - per-tenant field-mapping overrides
//!
//! All other crates are backend-agnostic and work with the traits.

pub mod client;

// Repository implementations
pub mod field_map;
pub mod settings;
pub mod templates;

pub use client::RestClient;
pub use field_map::FieldMapRepository;
pub use settings::SettingsRepository;
pub use templates::TemplateRepository;
