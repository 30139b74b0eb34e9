pub mod album_models;
pub mod artist_models;
pub mod label_models;
