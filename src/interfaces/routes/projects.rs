use actix_web::{guard, web};

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::get_projects))
                    .route(web::post().to(projects::create_project))
            )
            // Resource-level guard: GET/DELETE on `/sample` fall through to `/{project_id}`
            .service(
                web::resource("/sample")
                    .guard(guard::Post())
                    .route(web::post().to(projects::create_sample_projects))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project))
                    .route(web::delete().to(projects::delete_project))
            )
    );
}
