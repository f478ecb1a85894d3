//! Repository traits for message templates.

use async_trait::async_trait;

use crate::errors::Result;
use crate::templates::MessageTemplate;

/// Repository trait for the shared template collection on the backend.
#[async_trait]
pub trait TemplateRepositoryTrait: Send + Sync {
    /// Get all stored templates.
    async fn list_templates(&self) -> Result<Vec<MessageTemplate>>;

    /// Insert or update one template.
    ///
    /// The write is a compare-and-swap on `revision`: it succeeds only if
    /// the stored revision still equals the caller's, and returns the
    /// template with its revision bumped. A lost race yields
    /// `StoreError::Conflict`.
    async fn upsert_template(&self, template: &MessageTemplate) -> Result<MessageTemplate>;

    /// Delete one template by id.
    async fn delete_template(&self, template_id: &str) -> Result<()>;
}
