//! Process-local repositories. Records live only as long as the process and
//! keep insertion order, matching what a natural-order store scan returns.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{
    entities::{project::Project, status_check::StatusCheck},
    errors::AppError,
    repositories::{project::ProjectRepository, status_check::StatusCheckRepository},
};

#[derive(Default)]
pub struct InMemoryProjectRepo {
    projects: RwLock<Vec<Project>>,
}

#[derive(Default)]
pub struct InMemoryStatusCheckRepo {
    checks: RwLock<Vec<StatusCheck>>,
}

impl InMemoryProjectRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InMemoryStatusCheckRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn insert_project(&self, project: &Project) -> Result<(), AppError> {
        self.projects.write().push(project.clone());
        Ok(())
    }

    async fn list_projects(&self, limit: usize) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.read().iter().take(limit).cloned().collect())
    }

    async fn find_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects.read().iter().find(|p| p.id == id).cloned())
    }

    async fn delete_project_by_id(&self, id: &str) -> Result<u64, AppError> {
        let mut projects = self.projects.write();
        match projects.iter().position(|p| p.id == id) {
            Some(index) => {
                projects.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_all_projects(&self) -> Result<u64, AppError> {
        let mut projects = self.projects.write();
        let removed = projects.len() as u64;
        projects.clear();
        Ok(removed)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl StatusCheckRepository for InMemoryStatusCheckRepo {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.checks.write().push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError> {
        Ok(self.checks.read().iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{project::ProjectCreate, status_check::StatusCheckCreate};

    fn project(title: &str) -> Project {
        Project::from_create(ProjectCreate {
            title: title.into(),
            description: "d".into(),
            tech_stack: vec![],
            image_url: "i".into(),
            demo_url: None,
            github_url: None,
            category: "c".into(),
            featured: false,
        })
    }

    #[tokio::test]
    async fn list_respects_limit_and_order() {
        let repo = InMemoryProjectRepo::new();
        for title in ["a", "b", "c"] {
            repo.insert_project(&project(title)).await.unwrap();
        }

        let listed = repo.list_projects(2).await.unwrap();
        let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn delete_reports_matched_count() {
        let repo = InMemoryProjectRepo::new();
        let stored = project("a");
        repo.insert_project(&stored).await.unwrap();

        assert_eq!(repo.delete_project_by_id(&stored.id).await.unwrap(), 1);
        assert_eq!(repo.delete_project_by_id(&stored.id).await.unwrap(), 0);
        assert!(repo.find_project_by_id(&stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_all_empties_collection() {
        let repo = InMemoryProjectRepo::new();
        repo.insert_project(&project("a")).await.unwrap();
        repo.insert_project(&project("b")).await.unwrap();

        assert_eq!(repo.delete_all_projects().await.unwrap(), 2);
        assert!(repo.list_projects(1000).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn status_checks_round_trip() {
        let repo = InMemoryStatusCheckRepo::new();
        let check = StatusCheck::from_create(StatusCheckCreate { client_name: "uptime-monitor".into() });
        repo.insert_status_check(&check).await.unwrap();

        assert_eq!(repo.list_status_checks(1000).await.unwrap(), vec![check]);
    }
}
