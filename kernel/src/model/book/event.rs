use derive_new::new;

use crate::model::id::{AuthorId, BookId, GenreId};

#[derive(Debug, new)]
pub struct CreateBook {
    pub title: String,
    pub author_id: AuthorId,
    pub genre_id: GenreId,
}

#[derive(Debug, new)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub genre_id: GenreId,
}

#[derive(Debug, new)]
pub struct DeleteBook {
    pub book_id: BookId,
}
