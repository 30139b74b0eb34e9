//! Resolves album rows into `AlbumOutput`s with one artist query and one label
//! query per batch, whatever the number of albums.

use std::collections::{BTreeSet, HashMap};

use crate::models::album_models::{Album, AlbumOutput};
use crate::models::artist_models::Artist;
use crate::models::label_models::Label;
use crate::store::{RecordStore, StoreError};

/// Attaches artists and label to every album, keeping the input order.
///
/// Albums without artists get an empty list; albums whose label does not exist
/// get `Label::default()`. Only fetcher failures are reported as errors.
pub fn aggregate(
    store: &dyn RecordStore,
    albums: Vec<Album>,
) -> Result<Vec<AlbumOutput>, StoreError> {
    if albums.is_empty() {
        return Ok(Vec::new());
    }

    let album_ids: BTreeSet<i64> = albums.iter().map(|a| a.id).collect();
    let label_ids: BTreeSet<i64> = albums.iter().map(|a| a.label_id).collect();

    let artists = store.fetch_artists_by_album_ids(&album_ids)?;
    let labels = store.fetch_labels_by_ids(&label_ids)?;

    Ok(merge(albums, artists, labels))
}

/// Single-album form of [`aggregate`], sharing its missing-label policy.
pub fn album_output(store: &dyn RecordStore, album: Album) -> Result<AlbumOutput, StoreError> {
    let mut outputs = aggregate(store, vec![album])?;
    outputs.pop().ok_or(StoreError::NotFound("album"))
}

fn merge(albums: Vec<Album>, artists: Vec<Artist>, labels: Vec<Label>) -> Vec<AlbumOutput> {
    let mut artists_by_album: HashMap<i64, Vec<Artist>> = HashMap::new();
    for artist in artists {
        artists_by_album.entry(artist.album_id).or_default().push(artist);
    }

    let labels_by_id: HashMap<i64, Label> = labels.into_iter().map(|l| (l.id, l)).collect();

    albums
        .into_iter()
        .map(|album| AlbumOutput {
            // Duplicate album ids in the input each get the full artist list.
            artists: artists_by_album.get(&album.id).cloned().unwrap_or_default(),
            label: labels_by_id.get(&album.label_id).cloned().unwrap_or_default(),
            album,
        })
        .collect()
}
