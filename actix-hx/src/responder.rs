use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};
use log::warn;

use crate::Node;

impl Responder for Node {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let mut body = String::new();
        match self.render(&mut body) {
            Ok(()) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(body),
            Err(e) => {
                warn!("Failed to render response for {}: {}", req.path(), e);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}
