use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
#[cfg(test)]
use mockall::automock;

use crate::{
    entities::project::Project,
    errors::AppError,
    repositories::mongo_repo::{ping, MongoProjectRepo, ProjectDocument},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert_project(&self, project: &Project) -> Result<(), AppError>;
    async fn list_projects(&self, limit: usize) -> Result<Vec<Project>, AppError>;
    async fn find_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;
    /// Returns how many records matched; zero means the id was never stored or already gone.
    async fn delete_project_by_id(&self, id: &str) -> Result<u64, AppError>;
    async fn delete_all_projects(&self) -> Result<u64, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

#[async_trait]
impl ProjectRepository for MongoProjectRepo {
    async fn insert_project(&self, project: &Project) -> Result<(), AppError> {
        self.collection().insert_one(ProjectDocument::from(project)).await?;
        Ok(())
    }

    async fn list_projects(&self, limit: usize) -> Result<Vec<Project>, AppError> {
        let documents: Vec<ProjectDocument> = self
            .collection()
            .find(doc! {})
            .limit(limit as i64)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Project::from).collect())
    }

    async fn find_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        let document = self.collection().find_one(doc! { "id": id }).await?;
        Ok(document.map(Project::from))
    }

    async fn delete_project_by_id(&self, id: &str) -> Result<u64, AppError> {
        let result = self.collection().delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_all_projects(&self) -> Result<u64, AppError> {
        let result = self.collection().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        ping(&self.db).await
    }
}

#[async_trait]
impl<T> ProjectRepository for Arc<T>
where
    T: ProjectRepository + ?Sized,
{
    async fn insert_project(&self, project: &Project) -> Result<(), AppError> {
        (**self).insert_project(project).await
    }

    async fn list_projects(&self, limit: usize) -> Result<Vec<Project>, AppError> {
        (**self).list_projects(limit).await
    }

    async fn find_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        (**self).find_project_by_id(id).await
    }

    async fn delete_project_by_id(&self, id: &str) -> Result<u64, AppError> {
        (**self).delete_project_by_id(id).await
    }

    async fn delete_all_projects(&self) -> Result<u64, AppError> {
        (**self).delete_all_projects().await
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }
}
