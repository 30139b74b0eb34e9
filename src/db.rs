use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::MysqlConnection;

use crate::store::StoreError;

pub type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<MysqlConnection>>;

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, StoreError> {
    let manager = ConnectionManager::<MysqlConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| StoreError::Connection(e.to_string()))
}

/// Helper function to get a pooled DB connection
pub fn get_conn(pool: &DbPool) -> Result<DbConn, StoreError> {
    pool.get().map_err(|e| StoreError::Connection(e.to_string()))
}
