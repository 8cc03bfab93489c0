use std::sync::Arc;

use mongodb::Database;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, web};

use repositories::{
    in_memory::{InMemoryProjectRepo, InMemoryStatusCheckRepo},
    mongo_repo::{MongoProjectRepo, MongoStatusCheckRepo},
    project::ProjectRepository,
    status_check::StatusCheckRepository,
};
use use_cases::{projects::ProjectHandler, status::StatusCheckHandler};

pub type DynProjectRepo = Arc<dyn ProjectRepository>;
pub type DynStatusCheckRepo = Arc<dyn StatusCheckRepository>;

pub type AppProjectHandler = ProjectHandler<DynProjectRepo>;
pub type AppStatusHandler = StatusCheckHandler<DynStatusCheckRepo>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub status_handler: AppStatusHandler,
}

impl AppState {
    pub fn new(project_repo: DynProjectRepo, status_repo: DynStatusCheckRepo) -> Self {
        AppState {
            project_handler: ProjectHandler::new(project_repo),
            status_handler: StatusCheckHandler::new(status_repo),
        }
    }

    pub fn with_mongo(db: Database) -> Self {
        Self::new(
            Arc::new(MongoProjectRepo::new(db.clone())),
            Arc::new(MongoStatusCheckRepo::new(db)),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProjectRepo::new()),
            Arc::new(InMemoryStatusCheckRepo::new()),
        )
    }
}
