diesel::table! {
    albums (id) {
        id -> Bigint,
        #[max_length = 128]
        title -> Varchar,
        price -> Double,
        label_id -> Bigint,
    }
}

diesel::table! {
    artists (id) {
        id -> Bigint,
        #[max_length = 255]
        name -> Varchar,
        album_id -> Bigint,
    }
}

diesel::table! {
    labels (id) {
        id -> Bigint,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 64]
        country -> Varchar,
    }
}

diesel::joinable!(artists -> albums (album_id));
diesel::joinable!(albums -> labels (label_id));

diesel::allow_tables_to_appear_in_same_query!(
    albums,
    artists,
    labels,
);
