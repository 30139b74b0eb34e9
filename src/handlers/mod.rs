pub mod album_handlers;
pub mod artist_handlers;
pub mod label_handlers;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use tracing::{error, warn};

use crate::store::StoreError;

/// Maps a store failure to a response: `NotFound` becomes 404 with a message,
/// anything else is logged and reported with `status`.
pub fn store_error_response(status: StatusCode, err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => {
            HttpResponse::NotFound().json(json!({ "message": err.to_string() }))
        }
        _ => {
            error!("Store error: {}", err);
            HttpResponse::build(status).json(json!({ "error": err.to_string() }))
        }
    }
}

/// Rejects undecodable JSON bodies with 400 and the decoder's message.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}
