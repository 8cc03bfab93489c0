use actix_web::{HttpResponse, Responder};

use crate::entities::project::MessageResponse;

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello World".to_string(),
    })
}
