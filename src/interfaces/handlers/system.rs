use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub uptime: String,
    pub start_at: String,
    pub timestamp: String,
    pub database: String,
    pub version: String,
}

/// Liveness plus a store ping. Always 200; a failed ping only flips `database`.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = match state.project_handler.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check store ping failed: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        start_at: START_TIME.to_rfc3339(),
        timestamp: now_utc.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
