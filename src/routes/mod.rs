pub mod album_routes;
pub mod artist_routes;
pub mod label_routes;

use actix_web::web;

use crate::handlers::json_error_handler;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    album_routes::configure(cfg);
    artist_routes::configure(cfg);
    label_routes::configure(cfg);
}
