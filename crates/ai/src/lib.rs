//! Sentra AI - generative message composition.
//!
//! This crate turns a customer record plus an AI-flavored template into a
//! ready-to-send WhatsApp message. It builds a prompt around the
//! customer's communication strategy, sends it to a generative-text
//! endpoint in a single request/response exchange, and hands the plain
//! text back.
//!
//! # Architecture
//!
//! - `client`: `GenerativeClient` trait and the HTTP implementation
//! - `prompt`: prompt construction from customer + strategy + template
//! - `composer`: the composition service used by the API layer
//! - `error`: AI error types

pub mod client;
pub mod composer;
pub mod error;
pub mod prompt;

// Re-export main types for convenience
pub use client::{GenerativeClient, HttpGenerativeClient};
pub use composer::{ComposeRequest, ComposedMessage, MessageComposer, MessageComposerTrait};
pub use error::AiError;
pub use prompt::build_prompt;
