use actix_web::web;

use crate::handlers::label_handlers::create_label;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/labels").route("", web::post().to(create_label)));
}
