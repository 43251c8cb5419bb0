use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book::{
        event::{CreateBook, DeleteBook, UpdateBook},
        Book,
    },
    id::BookId,
};

#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Fails with `UnprocessableEntity` when the author or genre does not exist.
    async fn create(&self, event: CreateBook) -> AppResult<Book>;
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>>;
    /// Replaces title, author and genre. `EntityNotFound` if the book is
    /// gone, `UnprocessableEntity` if a referenced row is missing.
    async fn update(&self, event: UpdateBook) -> AppResult<()>;
    async fn delete(&self, event: DeleteBook) -> AppResult<()>;
}
