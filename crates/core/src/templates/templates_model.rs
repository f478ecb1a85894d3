//! Message template domain models.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The two template flavors: AI templates carry a prompt context for the
/// generative endpoint, manual templates carry literal content with
/// `{placeholder}` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "type")]
pub enum TemplateKind {
    Ai { prompt_context: String },
    Manual { content: String },
}

/// Domain model representing one outreach template.
///
/// Lifecycle: created/edited by an admin, persisted on the managed
/// backend, read by the composer at send time. `revision` guards saves:
/// a write carrying a stale revision is rejected by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(flatten)]
    pub kind: TemplateKind,
    #[serde(default)]
    pub revision: i64,
}

/// Built-in template set embedded at compile time.
///
/// Used whenever the backend is unreachable or holds no templates, so the
/// app stays usable offline.
static BUILTIN_TEMPLATES: Lazy<Vec<MessageTemplate>> = Lazy::new(|| {
    let json = include_str!("builtin_templates.json");
    serde_json::from_str(json).expect("Failed to parse builtin_templates.json")
});

/// Returns a fresh copy of the built-in template set.
pub fn builtin_templates() -> Vec<MessageTemplate> {
    BUILTIN_TEMPLATES.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        let templates = builtin_templates();
        assert!(!templates.is_empty());
        assert!(templates.iter().any(|t| matches!(t.kind, TemplateKind::Manual { .. })));
        assert!(templates.iter().any(|t| matches!(t.kind, TemplateKind::Ai { .. })));
    }

    #[test]
    fn test_template_serde_round_trip() {
        let template = MessageTemplate {
            id: "t1".to_string(),
            label: "Pengingat".to_string(),
            icon: "bell".to_string(),
            kind: TemplateKind::Manual {
                content: "Halo {name}".to_string(),
            },
            revision: 3,
        };
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("\"type\":\"manual\""));
        let back: MessageTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
