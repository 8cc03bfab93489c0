use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ───── Stored Model ─────────────────────────────────────────────────

/// A catalog entry as persisted and returned by the API.
///
/// `id` and `created_date` are assigned exactly once, by the server, when the
/// record is built from a [`ProjectCreate`]. There is no update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub category: String,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Fields a client may supply when creating a project.
///
/// Server-assigned fields are not part of this shape, so a body carrying
/// `id` or `created_date` has those keys dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectCreate {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    pub tech_stack: Vec<String>,

    #[validate(length(min = 1, message = "Image URL cannot be empty"))]
    pub image_url: String,

    #[serde(default)]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub github_url: Option<String>,

    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,

    #[serde(default)]
    pub featured: bool,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SampleProjectsResponse {
    pub message: String,
    pub projects: Vec<Project>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl Project {
    /// Builds the stored record in one step: fresh id, current timestamp,
    /// client fields copied verbatim.
    pub fn from_create(create: ProjectCreate) -> Self {
        Project {
            id: Uuid::new_v4().to_string(),
            title: create.title,
            description: create.description,
            tech_stack: create.tech_stack,
            image_url: create.image_url,
            demo_url: create.demo_url,
            github_url: create.github_url,
            category: create.category,
            // Millisecond precision is what the document store keeps
            created_date: Utc::now().trunc_subsecs(3),
            featured: create.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_payload() -> ProjectCreate {
        ProjectCreate {
            title: "Compiler".into(),
            description: "A toy compiler".into(),
            tech_stack: vec!["Rust".into(), "LLVM".into()],
            image_url: "https://img.example.com/c.png".into(),
            demo_url: None,
            github_url: Some("https://github.com/user/compiler".into()),
            category: "Tooling".into(),
            featured: false,
        }
    }

    #[test]
    fn from_create_assigns_id_and_timestamp() {
        let before = Utc::now().trunc_subsecs(3);
        let project = Project::from_create(create_payload());

        assert!(Uuid::parse_str(&project.id).is_ok());
        assert!(project.created_date >= before);
        assert_eq!(project.tech_stack, vec!["Rust", "LLVM"]);
        assert_eq!(project.demo_url, None);
        assert_eq!(project.github_url.as_deref(), Some("https://github.com/user/compiler"));
    }

    #[test]
    fn from_create_issues_distinct_ids() {
        let a = Project::from_create(create_payload());
        let b = Project::from_create(create_payload());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn create_shape_defaults_optional_fields() {
        let create: ProjectCreate = serde_json::from_value(json!({
            "title": "T",
            "description": "D",
            "tech_stack": [],
            "image_url": "I",
            "category": "C"
        }))
        .unwrap();

        assert!(!create.featured);
        assert!(create.demo_url.is_none());
        assert!(create.github_url.is_none());
    }

    #[test]
    fn create_shape_ignores_server_fields() {
        let create: ProjectCreate = serde_json::from_value(json!({
            "id": "client-chosen",
            "created_date": "2001-01-01T00:00:00Z",
            "title": "T",
            "description": "D",
            "tech_stack": ["a"],
            "image_url": "I",
            "category": "C"
        }))
        .unwrap();

        let project = Project::from_create(create);
        assert_ne!(project.id, "client-chosen");
    }

    #[test]
    fn create_shape_rejects_missing_title() {
        let result = serde_json::from_value::<ProjectCreate>(json!({
            "description": "D",
            "tech_stack": [],
            "image_url": "I",
            "category": "C"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_shape_rejects_wrong_types() {
        let result = serde_json::from_value::<ProjectCreate>(json!({
            "title": "T",
            "description": "D",
            "tech_stack": "Rust",
            "image_url": "I",
            "category": "C"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn validation_rejects_empty_required_strings() {
        let mut create = create_payload();
        create.title = String::new();
        create.category = String::new();

        let errors = create.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("category"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn validation_accepts_any_url_shaped_string() {
        let mut create = create_payload();
        create.image_url = "not a url".into();
        create.demo_url = Some("also not a url".into());
        assert!(create.validate().is_ok());
    }
}
