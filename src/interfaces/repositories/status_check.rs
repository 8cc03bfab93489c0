use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
#[cfg(test)]
use mockall::automock;

use crate::{
    entities::status_check::StatusCheck,
    errors::AppError,
    repositories::mongo_repo::{MongoStatusCheckRepo, StatusCheckDocument},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;
    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError>;
}

#[async_trait]
impl StatusCheckRepository for MongoStatusCheckRepo {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.collection().insert_one(StatusCheckDocument::from(check)).await?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError> {
        let documents: Vec<StatusCheckDocument> = self
            .collection()
            .find(doc! {})
            .limit(limit as i64)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(StatusCheck::from).collect())
    }
}

#[async_trait]
impl<T> StatusCheckRepository for Arc<T>
where
    T: StatusCheckRepository + ?Sized,
{
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        (**self).insert_status_check(check).await
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError> {
        (**self).list_status_checks(limit).await
    }
}
