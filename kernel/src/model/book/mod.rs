use super::id::{AuthorId, BookId, GenreId};

pub mod event;

/// A catalog entry. `author_id` and `genre_id` always point at existing
/// rows; the store rejects writes that would leave them dangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub genre_id: GenreId,
}
