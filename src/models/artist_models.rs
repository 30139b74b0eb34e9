use diesel::prelude::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::artists)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub album_id: i64,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::artists)]
pub struct NewArtist {
    pub name: String,
    pub album_id: i64,
}
