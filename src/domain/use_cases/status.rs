use crate::{
    constants::LIST_LIMIT,
    entities::status_check::{StatusCheck, StatusCheckCreate},
    errors::AppError,
    repositories::status_check::StatusCheckRepository,
};

pub struct StatusCheckHandler<R>
where
    R: StatusCheckRepository,
{
    pub status_repo: R,
}

impl<R> StatusCheckHandler<R>
where
    R: StatusCheckRepository,
{
    pub fn new(status_repo: R) -> Self {
        StatusCheckHandler { status_repo }
    }

    pub async fn create_status_check(&self, request: StatusCheckCreate) -> Result<StatusCheck, AppError> {
        let check = StatusCheck::from_create(request);
        self.status_repo.insert_status_check(&check).await?;

        Ok(check)
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, AppError> {
        self.status_repo.list_status_checks(LIST_LIMIT).await
    }
}
