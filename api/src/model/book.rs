use garde::Validate;
use kernel::model::{
    book::{
        event::{CreateBook, UpdateBook},
        Book,
    },
    id::{AuthorId, BookId, GenreId},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub author_id: AuthorId,
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub genre_id: GenreId,
}

impl From<CreateBookRequest> for CreateBook {
    fn from(value: CreateBookRequest) -> Self {
        let CreateBookRequest {
            title,
            author_id,
            genre_id,
        } = value;
        CreateBook::new(title, author_id, genre_id)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub id: BookId,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub author_id: AuthorId,
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub genre_id: GenreId,
}

impl From<UpdateBookRequest> for UpdateBook {
    fn from(value: UpdateBookRequest) -> Self {
        let UpdateBookRequest {
            id,
            title,
            author_id,
            genre_id,
        } = value;
        UpdateBook::new(id, title, author_id, genre_id)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[schema(value_type = i64)]
    pub id: BookId,
    pub title: String,
    #[schema(value_type = i64)]
    pub author_id: AuthorId,
    #[schema(value_type = i64)]
    pub genre_id: GenreId,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        let Book {
            id,
            title,
            author_id,
            genre_id,
        } = value;
        Self {
            id,
            title,
            author_id,
            genre_id,
        }
    }
}
