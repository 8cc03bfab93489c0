use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::ProjectCreate, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<ProjectCreate>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_id(&project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler.delete_project(&project_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn create_sample_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let response = state.project_handler.seed_sample_projects().await?;
    Ok(HttpResponse::Ok().json(response))
}
