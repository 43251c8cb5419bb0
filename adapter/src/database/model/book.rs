use kernel::model::{
    book::Book,
    id::{AuthorId, BookId, GenreId},
};

#[derive(sqlx::FromRow)]
pub struct BookRow {
    pub book_id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub genre_id: GenreId,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        let BookRow {
            book_id,
            title,
            author_id,
            genre_id,
        } = value;
        Self {
            id: book_id,
            title,
            author_id,
            genre_id,
        }
    }
}
