use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    author::{
        event::{CreateAuthor, DeleteAuthor, UpdateAuthor},
        Author,
    },
    id::AuthorId,
};

#[mockall::automock]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn create(&self, event: CreateAuthor) -> AppResult<Author>;
    async fn find_all(&self) -> AppResult<Vec<Author>>;
    async fn find_by_id(&self, author_id: AuthorId) -> AppResult<Option<Author>>;
    async fn update(&self, event: UpdateAuthor) -> AppResult<()>;
    /// Refuses with `Conflict` while books still reference the author.
    async fn delete(&self, event: DeleteAuthor) -> AppResult<()>;
}
