use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use tracing::info;

use crate::handlers::store_error_response;
use crate::models::label_models::NewLabel;
use crate::store::RecordStore;

pub async fn create_label(
    store: web::Data<dyn RecordStore>,
    payload: web::Json<NewLabel>,
) -> impl Responder {
    match store.insert_label(&payload) {
        Ok(label) => {
            info!("Created label {} ({})", label.id, label.name);
            HttpResponse::Created().json(label)
        }
        Err(e) => store_error_response(StatusCode::BAD_REQUEST, &e),
    }
}
