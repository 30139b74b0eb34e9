use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::album_models::{Album, NewAlbum, UpdateAlbum};
use crate::models::artist_models::{Artist, NewArtist};
use crate::models::label_models::{Label, NewLabel};

use super::{RecordStore, StoreError};

#[derive(Default)]
struct Tables {
    albums: Vec<Album>,
    artists: Vec<Artist>,
    labels: Vec<Label>,
    last_album_id: i64,
    last_artist_id: i64,
    last_label_id: i64,
}

/// Test store keeping rows in memory and counting fetcher calls.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    artist_fetches: AtomicUsize,
    label_fetches: AtomicUsize,
    unavailable: bool,
}

impl InMemoryStore {
    /// A store whose every operation fails with a connection error.
    pub fn unavailable() -> Self {
        InMemoryStore {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn artist_fetches(&self) -> usize {
        self.artist_fetches.load(Ordering::SeqCst)
    }

    pub fn label_fetches(&self) -> usize {
        self.label_fetches.load(Ordering::SeqCst)
    }

    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        Ok(self.tables.lock().unwrap())
    }
}

impl RecordStore for InMemoryStore {
    fn fetch_albums(&self, title_query: Option<&str>) -> Result<Vec<Album>, StoreError> {
        let tables = self.tables()?;
        let term = title_query.unwrap_or_default().to_lowercase();
        Ok(tables
            .albums
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    fn find_album(&self, album_id: i64) -> Result<Album, StoreError> {
        let tables = self.tables()?;
        tables
            .albums
            .iter()
            .find(|a| a.id == album_id)
            .cloned()
            .ok_or(StoreError::NotFound("album"))
    }

    fn insert_album(&self, album: &NewAlbum) -> Result<Album, StoreError> {
        let mut tables = self.tables()?;
        tables.last_album_id += 1;
        let album = Album {
            id: tables.last_album_id,
            title: album.title.clone(),
            price: album.price,
            label_id: album.label_id,
        };
        tables.albums.push(album.clone());
        Ok(album)
    }

    fn update_album(&self, album_id: i64, album: &UpdateAlbum) -> Result<Album, StoreError> {
        let mut tables = self.tables()?;
        let stored = tables
            .albums
            .iter_mut()
            .find(|a| a.id == album_id)
            .ok_or(StoreError::NotFound("album"))?;
        stored.title = album.title.clone();
        stored.price = album.price;
        stored.label_id = album.label_id;
        Ok(stored.clone())
    }

    fn delete_album(&self, album_id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables()?;
        let before = tables.albums.len();
        tables.albums.retain(|a| a.id != album_id);
        if tables.albums.len() == before {
            return Err(StoreError::NotFound("album"));
        }
        Ok(())
    }

    fn insert_artist(&self, artist: &NewArtist) -> Result<Artist, StoreError> {
        let mut tables = self.tables()?;
        tables.last_artist_id += 1;
        let artist = Artist {
            id: tables.last_artist_id,
            name: artist.name.clone(),
            album_id: artist.album_id,
        };
        tables.artists.push(artist.clone());
        Ok(artist)
    }

    fn insert_label(&self, label: &NewLabel) -> Result<Label, StoreError> {
        let mut tables = self.tables()?;
        tables.last_label_id += 1;
        let label = Label {
            id: tables.last_label_id,
            name: label.name.clone(),
            country: label.country.clone(),
        };
        tables.labels.push(label.clone());
        Ok(label)
    }

    fn fetch_artists_by_album_ids(
        &self,
        album_ids: &BTreeSet<i64>,
    ) -> Result<Vec<Artist>, StoreError> {
        if album_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.artist_fetches.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables()?;
        Ok(tables
            .artists
            .iter()
            .filter(|a| album_ids.contains(&a.album_id))
            .cloned()
            .collect())
    }

    fn fetch_labels_by_ids(&self, label_ids: &BTreeSet<i64>) -> Result<Vec<Label>, StoreError> {
        if label_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.label_fetches.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables()?;
        Ok(tables
            .labels
            .iter()
            .filter(|l| label_ids.contains(&l.id))
            .cloned()
            .collect())
    }
}
