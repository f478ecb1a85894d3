//! Compose module - manual message rendering and messaging deep links.

mod composer;
mod deeplink;

// Re-export the public interface
pub use composer::render_manual;
pub use deeplink::{normalize_phone, whatsapp_link};
