use derive_new::new;

use crate::model::id::GenreId;

#[derive(Debug, new)]
pub struct CreateGenre {
    pub name: String,
}

#[derive(Debug, new)]
pub struct UpdateGenre {
    pub genre_id: GenreId,
    pub name: String,
}

#[derive(Debug, new)]
pub struct DeleteGenre {
    pub genre_id: GenreId,
}
