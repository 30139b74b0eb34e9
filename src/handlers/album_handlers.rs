use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::aggregation::{aggregate, album_output};
use crate::handlers::store_error_response;
use crate::models::album_models::{AlbumQuery, NewAlbum, UpdateAlbum};
use crate::store::RecordStore;

pub async fn list_albums(
    store: web::Data<dyn RecordStore>,
    query: web::Query<AlbumQuery>,
) -> impl Responder {
    let albums = match store.fetch_albums(query.q.as_deref()) {
        Ok(list) => list,
        Err(e) => return store_error_response(StatusCode::INTERNAL_SERVER_ERROR, &e),
    };

    match aggregate(store.get_ref(), albums) {
        Ok(outputs) => HttpResponse::Ok().json(outputs),
        Err(e) => store_error_response(StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}

pub async fn get_album(store: web::Data<dyn RecordStore>, path: web::Path<i64>) -> impl Responder {
    let album_id = path.into_inner();

    let album = match store.find_album(album_id) {
        Ok(album) => album,
        Err(e) => return store_error_response(StatusCode::BAD_REQUEST, &e),
    };

    match album_output(store.get_ref(), album) {
        Ok(output) => HttpResponse::Ok().json(output),
        Err(e) => store_error_response(StatusCode::BAD_REQUEST, &e),
    }
}

pub async fn create_album(
    store: web::Data<dyn RecordStore>,
    payload: web::Json<NewAlbum>,
) -> impl Responder {
    match store.insert_album(&payload) {
        Ok(album) => {
            info!("Created album {} ({})", album.id, album.title);
            HttpResponse::Created().json(album)
        }
        Err(e) => store_error_response(StatusCode::BAD_REQUEST, &e),
    }
}

pub async fn update_album(
    store: web::Data<dyn RecordStore>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAlbum>,
) -> impl Responder {
    let album_id = path.into_inner();
    let update_data = payload.into_inner();

    match store.update_album(album_id, &update_data) {
        Ok(album) => HttpResponse::Ok().json(album),
        Err(e) => store_error_response(StatusCode::BAD_REQUEST, &e),
    }
}

/// Artists of the deleted album are not removed.
pub async fn delete_album(
    store: web::Data<dyn RecordStore>,
    path: web::Path<i64>,
) -> impl Responder {
    let album_id = path.into_inner();

    match store.delete_album(album_id) {
        Ok(()) => {
            info!("Deleted album {}", album_id);
            HttpResponse::Ok().json(json!({ "message": "album deleted" }))
        }
        Err(e) => store_error_response(StatusCode::BAD_REQUEST, &e),
    }
}
