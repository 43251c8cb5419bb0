use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        author::{
            event::{CreateAuthor, DeleteAuthor, UpdateAuthor},
            Author,
        },
        id::AuthorId,
    },
    repository::author::AuthorRepository,
};
use shared::error::{AppError, AppResult};

use super::is_foreign_key_violation;
use crate::database::{model::author::AuthorRow, ConnectionPool};

#[derive(new)]
pub struct AuthorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryImpl {
    #[tracing::instrument(skip(self))]
    async fn create(&self, event: CreateAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
                INSERT INTO authors (name)
                VALUES (?)
                RETURNING author_id, name
            "#,
        )
        .bind(event.name)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
                SELECT author_id, name
                FROM authors
                ORDER BY author_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, author_id: AuthorId) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
                SELECT author_id, name
                FROM authors
                WHERE author_id = ?
            "#,
        )
        .bind(author_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Author::from))
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, event: UpdateAuthor) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE authors
                SET name = ?
                WHERE author_id = ?
            "#,
        )
        .bind(event.name)
        .bind(event.author_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified author not found".into()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, event: DeleteAuthor) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM authors
                WHERE author_id = ?
            "#,
        )
        .bind(event.author_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::Conflict(format!("author {} still has books", event.author_id))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified author not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::prepare_test_database;

    async fn seeded_repository() -> anyhow::Result<AuthorRepositoryImpl> {
        let repo = AuthorRepositoryImpl::new(prepare_test_database().await?);
        for name in ["Author 1", "Author 2", "Author 3"] {
            repo.create(CreateAuthor::new(name.into())).await?;
        }
        Ok(repo)
    }

    #[tokio::test]
    async fn find_all_returns_authors_in_insertion_order() -> anyhow::Result<()> {
        let repo = seeded_repository().await?;
        let names: Vec<_> = repo
            .find_all()
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Author 1", "Author 2", "Author 3"]);
        Ok(())
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() -> anyhow::Result<()> {
        let repo = AuthorRepositoryImpl::new(prepare_test_database().await?);
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_then_find_by_id() -> anyhow::Result<()> {
        let repo = seeded_repository().await?;
        let created = repo.create(CreateAuthor::new("Author 4".into())).await?;
        assert_eq!(created.id, AuthorId::new(4));

        let found = repo.find_by_id(created.id).await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() -> anyhow::Result<()> {
        let repo = seeded_repository().await?;
        repo.delete(DeleteAuthor::new(AuthorId::new(3))).await?;
        let created = repo.create(CreateAuthor::new("Author 4".into())).await?;
        assert_eq!(created.id, AuthorId::new(4));
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_name() -> anyhow::Result<()> {
        let repo = seeded_repository().await?;
        let id = AuthorId::new(1);
        repo.update(UpdateAuthor::new(id, "Updated Author 1".into())).await?;

        let found = repo.find_by_id(id).await?;
        assert_eq!(found.map(|a| a.name).as_deref(), Some("Updated Author 1"));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_reported_as_not_found() -> anyhow::Result<()> {
        let repo = seeded_repository().await?;
        let missing = AuthorId::new(99);

        assert!(repo.find_by_id(missing).await?.is_none());
        let res = repo.update(UpdateAuthor::new(missing, "x".into())).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        let res = repo.delete(DeleteAuthor::new(missing)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_row() -> anyhow::Result<()> {
        let repo = seeded_repository().await?;
        let id = AuthorId::new(1);
        repo.delete(DeleteAuthor::new(id)).await?;
        assert!(repo.find_by_id(id).await?.is_none());
        assert_eq!(repo.find_all().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn names_keep_four_byte_characters() -> anyhow::Result<()> {
        let repo = AuthorRepositoryImpl::new(prepare_test_database().await?);
        let created = repo.create(CreateAuthor::new("夏目漱石 📚".into())).await?;
        let found = repo.find_by_id(created.id).await?;
        assert_eq!(found.map(|a| a.name).as_deref(), Some("夏目漱石 📚"));
        Ok(())
    }
}
