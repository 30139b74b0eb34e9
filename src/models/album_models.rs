use diesel::prelude::{AsChangeset, Insertable};
use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::models::artist_models::Artist;
use crate::models::label_models::Label;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::albums)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub label_id: i64,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::albums)]
pub struct NewAlbum {
    pub title: String,
    pub price: f64,
    pub label_id: i64,
}

#[derive(AsChangeset, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::albums)]
pub struct UpdateAlbum {
    pub title: String,
    pub price: f64,
    pub label_id: i64,
}

#[derive(Deserialize)]
pub struct AlbumQuery {
    pub q: Option<String>,
}

// --------------------- Response Models ---------------------
/// An album with its artists and label resolved. The album's own fields are
/// flattened into the top level of the JSON object.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AlbumOutput {
    #[serde(flatten)]
    pub album: Album,
    pub artists: Vec<Artist>,
    pub label: Label,
}
