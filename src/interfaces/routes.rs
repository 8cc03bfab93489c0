use actix_web::web;

use crate::handlers::{home, system};

mod projects;
mod status;
mod json_error;

/// Registers the catalog API under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::resource("").route(web::get().to(home::root)))
            .service(web::resource("/health").route(web::get().to(system::health_check)))
            .configure(status::config_routes)
            .configure(projects::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
