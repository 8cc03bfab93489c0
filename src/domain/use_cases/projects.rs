use validator::Validate;

use crate::{
    constants::LIST_LIMIT,
    entities::{
        project::{MessageResponse, Project, ProjectCreate, SampleProjectsResponse},
        sample_projects::sample_projects,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
};

const PROJECT_NOT_FOUND: &str = "Project not found";

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Validates the create shape, stamps id and timestamp, then stores it.
    pub async fn create_project(&self, request: ProjectCreate) -> Result<Project, AppError> {
        request.validate()?;

        let project = Project::from_create(request);
        self.project_repo.insert_project(&project).await?;

        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(LIST_LIMIT).await
    }

    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        self.project_repo
            .find_project_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PROJECT_NOT_FOUND.to_string()))
    }

    pub async fn delete_project(&self, id: &str) -> Result<MessageResponse, AppError> {
        let deleted = self.project_repo.delete_project_by_id(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(PROJECT_NOT_FOUND.to_string()));
        }

        tracing::info!(project_id = %id, "Project deleted");
        Ok(MessageResponse {
            message: "Project deleted successfully".to_string(),
        })
    }

    /// Replaces the whole catalog with the fixed demo set.
    ///
    /// The clear and the inserts are separate store calls; a concurrent reader
    /// may see an empty or partially seeded catalog in between.
    pub async fn seed_sample_projects(&self) -> Result<SampleProjectsResponse, AppError> {
        let cleared = self.project_repo.delete_all_projects().await?;
        tracing::debug!(cleared, "Cleared project catalog before seeding");

        let mut projects = Vec::new();
        for sample in sample_projects() {
            let project = Project::from_create(sample);
            self.project_repo.insert_project(&project).await?;
            projects.push(project);
        }

        tracing::info!(count = projects.len(), "Seeded sample projects");
        Ok(SampleProjectsResponse {
            message: format!("Created {} sample projects", projects.len()),
            projects,
        })
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.project_repo.check_connection().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::project::MockProjectRepository;
    use mockall::predicate::eq;

    fn valid_create() -> ProjectCreate {
        ProjectCreate {
            title: "Compiler".into(),
            description: "A toy compiler".into(),
            tech_stack: vec!["Rust".into()],
            image_url: "https://img.example.com/c.png".into(),
            demo_url: None,
            github_url: None,
            category: "Tooling".into(),
            featured: true,
        }
    }

    #[tokio::test]
    async fn create_project_stores_enriched_record() {
        let mut repo = MockProjectRepository::new();
        repo.expect_insert_project()
            .withf(|p| p.title == "Compiler" && p.featured && !p.id.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let handler = ProjectHandler::new(repo);
        let project = handler.create_project(valid_create()).await.unwrap();

        assert_eq!(project.category, "Tooling");
    }

    #[tokio::test]
    async fn invalid_create_never_reaches_store() {
        let mut repo = MockProjectRepository::new();
        repo.expect_insert_project().never();

        let mut request = valid_create();
        request.title = String::new();

        let handler = ProjectHandler::new(repo);
        let err = handler.create_project(request).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn missing_project_maps_to_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_project_by_id()
            .withf(|id| id.to_string() == "nope")
            .returning(|_| Ok(None));

        let handler = ProjectHandler::new(repo);
        let err = handler.get_project_by_id("nope").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg == "Project not found"));
    }

    #[tokio::test]
    async fn zero_deleted_maps_to_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_project_by_id().returning(|_| Ok(0));

        let handler = ProjectHandler::new(repo);
        let err = handler.delete_project("nope").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn store_failure_is_not_reported_as_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_project_by_id()
            .returning(|_| Err(AppError::InternalError("connection reset".into())));

        let handler = ProjectHandler::new(repo);
        let err = handler.delete_project("any").await.unwrap_err();

        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[tokio::test]
    async fn list_projects_uses_cap() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .with(eq(LIST_LIMIT))
            .returning(|_| Ok(vec![]));

        let handler = ProjectHandler::new(repo);
        assert!(handler.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_clears_then_inserts_six() {
        let mut seq = mockall::Sequence::new();
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_all_projects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(3));
        repo.expect_insert_project()
            .times(6)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let handler = ProjectHandler::new(repo);
        let response = handler.seed_sample_projects().await.unwrap();

        assert_eq!(response.message, "Created 6 sample projects");
        assert_eq!(response.projects.len(), 6);
    }

    #[tokio::test]
    async fn seed_aborts_on_insert_failure() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_all_projects().returning(|| Ok(0));
        repo.expect_insert_project()
            .times(1)
            .returning(|_| Err(AppError::InternalError("write failed".into())));

        let handler = ProjectHandler::new(repo);
        assert!(handler.seed_sample_projects().await.is_err());
    }
}
