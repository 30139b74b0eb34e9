use actix_web::web;

use crate::handlers::artist_handlers::create_artist;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/artists").route("", web::post().to(create_artist)));
}
