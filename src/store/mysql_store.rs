use std::collections::BTreeSet;

use diesel::mysql::Mysql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use tracing::debug;

use crate::db::{get_conn, DbConn, DbPool};
use crate::models::album_models::{Album, NewAlbum, UpdateAlbum};
use crate::models::artist_models::{Artist, NewArtist};
use crate::models::label_models::{Label, NewLabel};
use crate::schema::{albums, artists, labels};

use super::{contains_pattern, RecordStore, StoreError};

diesel::define_sql_function!(fn lower(x: Text) -> Text);
diesel::define_sql_function!(fn last_insert_id() -> Unsigned<BigInt>);

/// `RecordStore` backed by MySQL through a diesel r2d2 pool.
pub struct MysqlStore {
    pool: DbPool,
}

impl MysqlStore {
    pub fn new(pool: DbPool) -> Self {
        MysqlStore { pool }
    }

    fn conn(&self) -> Result<DbConn, StoreError> {
        get_conn(&self.pool)
    }
}

// MySQL has no RETURNING; the id must be read on the connection that inserted.
fn last_inserted_id(conn: &mut DbConn) -> Result<i64, StoreError> {
    let id = diesel::select(last_insert_id()).get_result::<u64>(conn)?;
    Ok(id as i64)
}

fn load_album(conn: &mut DbConn, album_id: i64) -> Result<Album, StoreError> {
    albums::table
        .find(album_id)
        .select(Album::as_select())
        .first::<Album>(conn)
        .optional()?
        .ok_or(StoreError::NotFound("album"))
}

/// All albums by id, narrowed to titles containing `title_query` (any case)
/// when it is non-empty. Selects every column, in `Album` field order.
fn albums_query(title_query: Option<&str>) -> albums::BoxedQuery<'static, Mysql> {
    let mut query = albums::table.order(albums::id.asc()).into_boxed();

    if let Some(term) = title_query.filter(|t| !t.is_empty()) {
        query = query.filter(lower(albums::title).like(contains_pattern(term)));
    }

    query
}

impl RecordStore for MysqlStore {
    fn fetch_albums(&self, title_query: Option<&str>) -> Result<Vec<Album>, StoreError> {
        let mut conn = self.conn()?;
        Ok(albums_query(title_query).load::<Album>(&mut conn)?)
    }

    fn find_album(&self, album_id: i64) -> Result<Album, StoreError> {
        let mut conn = self.conn()?;
        load_album(&mut conn, album_id)
    }

    fn insert_album(&self, album: &NewAlbum) -> Result<Album, StoreError> {
        let mut conn = self.conn()?;

        diesel::insert_into(albums::table)
            .values(album)
            .execute(&mut conn)?;

        let new_id = last_inserted_id(&mut conn)?;
        load_album(&mut conn, new_id)
    }

    fn update_album(&self, album_id: i64, album: &UpdateAlbum) -> Result<Album, StoreError> {
        let mut conn = self.conn()?;

        // Affected rows only counts changed rows, so existence is decided by
        // the read-back.
        diesel::update(albums::table.find(album_id))
            .set(album)
            .execute(&mut conn)?;

        load_album(&mut conn, album_id)
    }

    fn delete_album(&self, album_id: i64) -> Result<(), StoreError> {
        let mut conn = self.conn()?;

        match diesel::delete(albums::table.find(album_id)).execute(&mut conn)? {
            0 => Err(StoreError::NotFound("album")),
            _ => Ok(()),
        }
    }

    fn insert_artist(&self, artist: &NewArtist) -> Result<Artist, StoreError> {
        let mut conn = self.conn()?;

        diesel::insert_into(artists::table)
            .values(artist)
            .execute(&mut conn)?;

        let new_id = last_inserted_id(&mut conn)?;
        artists::table
            .find(new_id)
            .select(Artist::as_select())
            .first::<Artist>(&mut conn)
            .optional()?
            .ok_or(StoreError::NotFound("artist"))
    }

    fn insert_label(&self, label: &NewLabel) -> Result<Label, StoreError> {
        let mut conn = self.conn()?;

        diesel::insert_into(labels::table)
            .values(label)
            .execute(&mut conn)?;

        let new_id = last_inserted_id(&mut conn)?;
        labels::table
            .find(new_id)
            .select(Label::as_select())
            .first::<Label>(&mut conn)
            .optional()?
            .ok_or(StoreError::NotFound("label"))
    }

    fn fetch_artists_by_album_ids(
        &self,
        album_ids: &BTreeSet<i64>,
    ) -> Result<Vec<Artist>, StoreError> {
        if album_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = album_ids.iter().copied().collect();
        debug!("Fetching artists for {} albums", ids.len());

        let mut conn = self.conn()?;
        Ok(artists::table
            .filter(artists::album_id.eq_any(ids))
            .select(Artist::as_select())
            .load::<Artist>(&mut conn)?)
    }

    fn fetch_labels_by_ids(&self, label_ids: &BTreeSet<i64>) -> Result<Vec<Label>, StoreError> {
        if label_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = label_ids.iter().copied().collect();
        debug!("Fetching {} labels", ids.len());

        let mut conn = self.conn()?;
        Ok(labels::table
            .filter(labels::id.eq_any(ids))
            .select(Label::as_select())
            .load::<Label>(&mut conn)?)
    }
}
