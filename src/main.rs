mod aggregation;
mod config;
mod db;
mod handlers;
mod logging;
mod models;
mod routes;
mod schema;
mod store;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::{error, info};

use crate::config::{AppConfig, BIND_ADDR, DB_POOL_SIZE};
use crate::store::{MysqlStore, RecordStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();
    logging::init_tracing(&config.log_level);

    info!("Connecting to {}", config.connection_summary());
    let pool = db::build_pool(&config.database_url(), DB_POOL_SIZE).map_err(|e| {
        error!("Failed to create DB pool: {}", e);
        std::io::Error::other(e)
    })?;

    let store: Arc<dyn RecordStore> = Arc::new(MysqlStore::new(pool));
    let store_data = web::Data::from(store);

    let (host, port) = BIND_ADDR;
    info!("Starting server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store_data.clone())
            .configure(routes::configure)
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}
