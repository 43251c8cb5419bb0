use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        genre::{
            event::{CreateGenre, DeleteGenre, UpdateGenre},
            Genre,
        },
        id::GenreId,
    },
    repository::genre::GenreRepository,
};
use shared::error::{AppError, AppResult};

use super::is_foreign_key_violation;
use crate::database::{model::genre::GenreRow, ConnectionPool};

#[derive(new)]
pub struct GenreRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    #[tracing::instrument(skip(self))]
    async fn create(&self, event: CreateGenre) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, GenreRow>(
            r#"
                INSERT INTO genres (name)
                VALUES (?)
                RETURNING genre_id, name
            "#,
        )
        .bind(event.name)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, GenreRow>(
            r#"
                SELECT genre_id, name
                FROM genres
                ORDER BY genre_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, genre_id: GenreId) -> AppResult<Option<Genre>> {
        let row = sqlx::query_as::<_, GenreRow>(
            r#"
                SELECT genre_id, name
                FROM genres
                WHERE genre_id = ?
            "#,
        )
        .bind(genre_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Genre::from))
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, event: UpdateGenre) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE genres
                SET name = ?
                WHERE genre_id = ?
            "#,
        )
        .bind(event.name)
        .bind(event.genre_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified genre not found".into()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, event: DeleteGenre) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM genres
                WHERE genre_id = ?
            "#,
        )
        .bind(event.genre_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::Conflict(format!("genre {} is still assigned to books", event.genre_id))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified genre not found".into()));
        }

        Ok(())
    }
}
