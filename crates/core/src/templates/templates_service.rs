use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use uuid::Uuid;

use crate::errors::Error;
use crate::templates::templates_model::builtin_templates;
use crate::templates::{MessageTemplate, TemplateRepositoryTrait};
use crate::Result;

/// Service trait for template management.
#[async_trait]
pub trait TemplateServiceTrait: Send + Sync {
    /// The effective template set: the backend's collection when it is
    /// reachable and non-empty, the built-in set otherwise.
    async fn get_templates(&self) -> Result<Vec<MessageTemplate>>;

    /// One template by id, from the effective set.
    async fn get_template(&self, template_id: &str) -> Result<MessageTemplate>;

    /// Saves one template. New templates (empty id) get a generated id;
    /// a stale revision surfaces as a conflict for the caller to handle.
    async fn save_template(&self, template: MessageTemplate) -> Result<MessageTemplate>;

    /// Deletes one template.
    async fn delete_template(&self, template_id: &str) -> Result<()>;
}

/// Service for managing outreach templates.
pub struct TemplateService {
    template_repository: Arc<dyn TemplateRepositoryTrait>,
}

impl TemplateService {
    pub fn new(template_repository: Arc<dyn TemplateRepositoryTrait>) -> Self {
        Self {
            template_repository,
        }
    }
}

#[async_trait]
impl TemplateServiceTrait for TemplateService {
    async fn get_templates(&self) -> Result<Vec<MessageTemplate>> {
        match self.template_repository.list_templates().await {
            Ok(templates) if !templates.is_empty() => Ok(templates),
            Ok(_) => Ok(builtin_templates()),
            Err(e) => {
                warn!("Template backend unavailable, using built-ins: {}", e);
                Ok(builtin_templates())
            }
        }
    }

    async fn get_template(&self, template_id: &str) -> Result<MessageTemplate> {
        self.get_templates()
            .await?
            .into_iter()
            .find(|t| t.id == template_id)
            .ok_or_else(|| Error::Template(format!("Template '{}' not found", template_id)))
    }

    async fn save_template(&self, mut template: MessageTemplate) -> Result<MessageTemplate> {
        if template.id.trim().is_empty() {
            template.id = Uuid::new_v4().to_string();
            template.revision = 0;
        }
        self.template_repository.upsert_template(&template).await
    }

    async fn delete_template(&self, template_id: &str) -> Result<()> {
        self.template_repository.delete_template(template_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::templates::TemplateKind;
    use std::sync::Mutex;

    struct FakeRepo {
        templates: Mutex<Vec<MessageTemplate>>,
        fail_reads: bool,
    }

    impl FakeRepo {
        fn with(templates: Vec<MessageTemplate>) -> Self {
            Self {
                templates: Mutex::new(templates),
                fail_reads: false,
            }
        }
    }

    #[async_trait]
    impl TemplateRepositoryTrait for FakeRepo {
        async fn list_templates(&self) -> Result<Vec<MessageTemplate>> {
            if self.fail_reads {
                return Err(StoreError::ConnectionFailed("offline".into()).into());
            }
            Ok(self.templates.lock().unwrap().clone())
        }

        async fn upsert_template(&self, template: &MessageTemplate) -> Result<MessageTemplate> {
            let mut stored = self.templates.lock().unwrap();
            if let Some(existing) = stored.iter_mut().find(|t| t.id == template.id) {
                if existing.revision != template.revision {
                    return Err(StoreError::Conflict(template.id.clone()).into());
                }
                *existing = template.clone();
                existing.revision += 1;
                return Ok(existing.clone());
            }
            let mut inserted = template.clone();
            inserted.revision = 1;
            stored.push(inserted.clone());
            Ok(inserted)
        }

        async fn delete_template(&self, template_id: &str) -> Result<()> {
            self.templates.lock().unwrap().retain(|t| t.id != template_id);
            Ok(())
        }
    }

    fn manual(id: &str, revision: i64) -> MessageTemplate {
        MessageTemplate {
            id: id.to_string(),
            label: "Tes".to_string(),
            icon: "bell".to_string(),
            kind: TemplateKind::Manual {
                content: "Halo {name}".to_string(),
            },
            revision,
        }
    }

    #[tokio::test]
    async fn test_empty_backend_falls_back_to_builtins() {
        let service = TemplateService::new(Arc::new(FakeRepo::with(vec![])));
        let templates = service.get_templates().await.unwrap();
        assert!(templates.iter().any(|t| t.id.starts_with("builtin-")));
    }

    #[tokio::test]
    async fn test_unreachable_backend_falls_back_to_builtins() {
        let mut repo = FakeRepo::with(vec![manual("t1", 0)]);
        repo.fail_reads = true;
        let service = TemplateService::new(Arc::new(repo));
        let templates = service.get_templates().await.unwrap();
        assert!(templates.iter().all(|t| t.id.starts_with("builtin-")));
    }

    #[tokio::test]
    async fn test_save_generates_id_for_new_template() {
        let service = TemplateService::new(Arc::new(FakeRepo::with(vec![])));
        let saved = service.save_template(manual("", 0)).await.unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.revision, 1);
    }

    #[tokio::test]
    async fn test_stale_revision_is_a_conflict() {
        let repo = Arc::new(FakeRepo::with(vec![manual("t1", 2)]));
        let service = TemplateService::new(repo);
        let result = service.save_template(manual("t1", 1)).await;
        assert!(matches!(
            result,
            Err(Error::Store(StoreError::Conflict(_)))
        ));
    }
}
