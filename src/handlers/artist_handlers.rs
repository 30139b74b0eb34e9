use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use tracing::info;

use crate::handlers::store_error_response;
use crate::models::artist_models::NewArtist;
use crate::store::RecordStore;

pub async fn create_artist(
    store: web::Data<dyn RecordStore>,
    payload: web::Json<NewArtist>,
) -> impl Responder {
    match store.insert_artist(&payload) {
        Ok(artist) => {
            info!("Created artist {} on album {}", artist.id, artist.album_id);
            HttpResponse::Created().json(artist)
        }
        Err(e) => store_error_response(StatusCode::BAD_REQUEST, &e),
    }
}
