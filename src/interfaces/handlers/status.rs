use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::status_check::StatusCheckCreate, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn create_status_check(
    state: web::Data<AppState>,
    data: web::Json<StatusCheckCreate>,
) -> Result<impl Responder, AppError> {
    let check = state
        .status_handler
        .create_status_check(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(check))
}

#[instrument(skip(state))]
pub async fn get_status_checks(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let checks = state.status_handler.list_status_checks().await?;
    Ok(HttpResponse::Ok().json(checks))
}
