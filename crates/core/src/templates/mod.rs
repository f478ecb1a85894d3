//! Templates module - outreach template models and services.

mod templates_model;
mod templates_service;
mod templates_traits;

// Re-export the public interface
pub use templates_model::{builtin_templates, MessageTemplate, TemplateKind};
pub use templates_service::{TemplateService, TemplateServiceTrait};
pub use templates_traits::TemplateRepositoryTrait;
