use diesel::prelude::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

/// `Label::default()` is the zero-valued label reported for albums whose
/// `label_id` matches no row.
#[derive(Queryable, Selectable, Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::labels)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub country: String,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::labels)]
pub struct NewLabel {
    pub name: String,
    pub country: String,
}
