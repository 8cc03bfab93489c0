use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const PROJECTS_COLLECTION: &str = "projects";
pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";

/// Upper bound on list responses. Not a page size; extra records are dropped.
pub const LIST_LIMIT: usize = 1000;
