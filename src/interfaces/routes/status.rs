use actix_web::web;

use crate::handlers::status;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/status")
            .route(web::post().to(status::create_status_check))
            .route(web::get().to(status::get_status_checks))
    );
}
