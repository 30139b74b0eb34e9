mod mysql_store;
#[cfg(test)]
pub mod memory_store;

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::album_models::{Album, NewAlbum, UpdateAlbum};
use crate::models::artist_models::{Artist, NewArtist};
use crate::models::label_models::{Label, NewLabel};

pub use mysql_store::MysqlStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Query(#[from] diesel::result::Error),

    #[error("{0} not found")]
    NotFound(&'static str),
}

/// Access to the albums, artists and labels tables.
pub trait RecordStore: Send + Sync {
    /// Returns every album ordered by id. A non-empty `title_query` keeps only
    /// albums whose title contains it, ignoring case.
    fn fetch_albums(&self, title_query: Option<&str>) -> Result<Vec<Album>, StoreError>;

    /// Returns the album with the given id, or `StoreError::NotFound`.
    fn find_album(&self, album_id: i64) -> Result<Album, StoreError>;

    /// Inserts an album and returns the row as stored.
    fn insert_album(&self, album: &NewAlbum) -> Result<Album, StoreError>;

    /// Overwrites an album's fields and returns the row as stored.
    /// Returns `StoreError::NotFound` if the album does not exist.
    fn update_album(&self, album_id: i64, album: &UpdateAlbum) -> Result<Album, StoreError>;

    /// Deletes an album. Artists referencing it are left in place.
    /// Returns `StoreError::NotFound` if no row was deleted.
    fn delete_album(&self, album_id: i64) -> Result<(), StoreError>;

    /// Inserts an artist and returns the row as stored.
    fn insert_artist(&self, artist: &NewArtist) -> Result<Artist, StoreError>;

    /// Inserts a label and returns the row as stored.
    fn insert_label(&self, label: &NewLabel) -> Result<Label, StoreError>;

    /// Returns all artists whose album id is in `album_ids`, in no particular
    /// order. An empty set yields an empty list without a query.
    fn fetch_artists_by_album_ids(
        &self,
        album_ids: &BTreeSet<i64>,
    ) -> Result<Vec<Artist>, StoreError>;

    /// Returns all labels whose id is in `label_ids`, in no particular order.
    /// An empty set yields an empty list without a query.
    fn fetch_labels_by_ids(&self, label_ids: &BTreeSet<i64>) -> Result<Vec<Label>, StoreError>;
}

/// Builds a `LIKE` pattern matching `term` anywhere in a string, with the
/// pattern metacharacters in `term` escaped. The result is lowercased.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
