use chrono::{DateTime, Utc};
use mongodb::{
    bson::{self, doc},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{PROJECTS_COLLECTION, STATUS_CHECKS_COLLECTION},
    entities::{project::Project, status_check::StatusCheck},
    errors::AppError,
};

#[derive(Clone)]
pub struct MongoProjectRepo {
    pub db: Database,
}

#[derive(Clone)]
pub struct MongoStatusCheckRepo {
    pub db: Database,
}

// ───── Stored Documents ─────────────────────────────────────────────
// Same fields as the API records, with timestamps kept as native BSON dates.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub category: String,
    pub created_date: bson::DateTime,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckDocument {
    pub id: String,
    pub client_name: String,
    pub timestamp: bson::DateTime,
}

fn to_bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

fn from_bson_datetime(dt: bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(dt.to_system_time())
}

impl From<&Project> for ProjectDocument {
    fn from(project: &Project) -> Self {
        ProjectDocument {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            tech_stack: project.tech_stack.clone(),
            image_url: project.image_url.clone(),
            demo_url: project.demo_url.clone(),
            github_url: project.github_url.clone(),
            category: project.category.clone(),
            created_date: to_bson_datetime(project.created_date),
            featured: project.featured,
        }
    }
}

impl From<ProjectDocument> for Project {
    fn from(doc: ProjectDocument) -> Self {
        Project {
            id: doc.id,
            title: doc.title,
            description: doc.description,
            tech_stack: doc.tech_stack,
            image_url: doc.image_url,
            demo_url: doc.demo_url,
            github_url: doc.github_url,
            category: doc.category,
            created_date: from_bson_datetime(doc.created_date),
            featured: doc.featured,
        }
    }
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(check: &StatusCheck) -> Self {
        StatusCheckDocument {
            id: check.id.clone(),
            client_name: check.client_name.clone(),
            timestamp: to_bson_datetime(check.timestamp),
        }
    }
}

impl From<StatusCheckDocument> for StatusCheck {
    fn from(doc: StatusCheckDocument) -> Self {
        StatusCheck {
            id: doc.id,
            client_name: doc.client_name,
            timestamp: from_bson_datetime(doc.timestamp),
        }
    }
}

impl MongoProjectRepo {
    pub fn new(db: Database) -> Self {
        MongoProjectRepo { db }
    }

    pub(crate) fn collection(&self) -> Collection<ProjectDocument> {
        self.db.collection(PROJECTS_COLLECTION)
    }
}

impl MongoStatusCheckRepo {
    pub fn new(db: Database) -> Self {
        MongoStatusCheckRepo { db }
    }

    pub(crate) fn collection(&self) -> Collection<StatusCheckDocument> {
        self.db.collection(STATUS_CHECKS_COLLECTION)
    }
}

pub(crate) async fn ping(db: &Database) -> Result<(), AppError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
