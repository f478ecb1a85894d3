//! Agenda module - the follow-up classifier and its service.

mod agenda_model;
mod agenda_service;
mod classifier;
mod strategy;

#[cfg(test)]
mod classifier_tests;

// Re-export the public interface
pub use agenda_model::{AgendaCategory, AgendaConfig, FollowUp, FollowUpKind};
pub use agenda_service::{AgendaService, AgendaServiceTrait};
pub use classifier::classify;
pub use strategy::{derive_strategy, CommunicationStrategy, SOFT_COLLECTIONS_DPD};
