use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book::{
            event::{CreateBook, DeleteBook, UpdateBook},
            Book,
        },
        id::{AuthorId, BookId, GenreId},
    },
    repository::book::BookRepository,
};
use shared::error::{AppError, AppResult};

use super::is_foreign_key_violation;
use crate::database::{model::book::BookRow, ConnectionPool};

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

/// Dangling author or genre references surface as a foreign key
/// violation from the store.
fn map_write_error(e: sqlx::Error, author_id: AuthorId, genre_id: GenreId) -> AppError {
    if is_foreign_key_violation(&e) {
        AppError::UnprocessableEntity(format!(
            "author {author_id} or genre {genre_id} does not exist"
        ))
    } else {
        AppError::SpecificOperationError(e)
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    #[tracing::instrument(skip(self))]
    async fn create(&self, event: CreateBook) -> AppResult<Book> {
        let CreateBook {
            title,
            author_id,
            genre_id,
        } = event;
        let row = sqlx::query_as::<_, BookRow>(
            r#"
                INSERT INTO books (title, author_id, genre_id)
                VALUES (?, ?, ?)
                RETURNING book_id, title, author_id, genre_id
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(genre_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_write_error(e, author_id, genre_id))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
                SELECT book_id, title, author_id, genre_id
                FROM books
                ORDER BY book_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
                SELECT book_id, title, author_id, genre_id
                FROM books
                WHERE book_id = ?
            "#,
        )
        .bind(book_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Book::from))
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, event: UpdateBook) -> AppResult<()> {
        let UpdateBook {
            book_id,
            title,
            author_id,
            genre_id,
        } = event;
        let res = sqlx::query(
            r#"
                UPDATE books
                SET title = ?, author_id = ?, genre_id = ?
                WHERE book_id = ?
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(genre_id)
        .bind(book_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| map_write_error(e, author_id, genre_id))?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified book not found".into()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, event: DeleteBook) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM books
                WHERE book_id = ?
            "#,
        )
        .bind(event.book_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified book not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kernel::{
        model::{
            author::event::{CreateAuthor, DeleteAuthor},
            genre::event::{CreateGenre, DeleteGenre},
        },
        repository::{author::AuthorRepository, genre::GenreRepository},
    };

    use super::*;
    use crate::{
        database::prepare_test_database,
        repository::{author::AuthorRepositoryImpl, genre::GenreRepositoryImpl},
    };

    struct Catalog {
        authors: AuthorRepositoryImpl,
        genres: GenreRepositoryImpl,
        books: BookRepositoryImpl,
    }

    async fn seeded_catalog() -> anyhow::Result<Catalog> {
        let db = prepare_test_database().await?;
        let catalog = Catalog {
            authors: AuthorRepositoryImpl::new(db.clone()),
            genres: GenreRepositoryImpl::new(db.clone()),
            books: BookRepositoryImpl::new(db),
        };
        for name in ["Author 1", "Author 2"] {
            catalog.authors.create(CreateAuthor::new(name.into())).await?;
        }
        for name in ["Fiction", "Thriller"] {
            catalog.genres.create(CreateGenre::new(name.into())).await?;
        }
        for (title, author, genre) in [("Book 1", 1, 1), ("Book 2", 1, 2), ("Book 3", 2, 1)] {
            catalog
                .books
                .create(CreateBook::new(
                    title.into(),
                    AuthorId::new(author),
                    GenreId::new(genre),
                ))
                .await?;
        }
        Ok(catalog)
    }

    #[tokio::test]
    async fn find_all_returns_seeded_books_with_resolvable_references() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;
        let books = catalog.books.find_all().await?;
        assert_eq!(books.len(), 3);
        for book in books {
            assert!(catalog.authors.find_by_id(book.author_id).await?.is_some());
            assert!(catalog.genres.find_by_id(book.genre_id).await?.is_some());
        }
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_a_fresh_id() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;
        let created = catalog
            .books
            .create(CreateBook::new(
                "Book 4".into(),
                AuthorId::new(1),
                GenreId::new(1),
            ))
            .await?;
        assert_eq!(created.id, BookId::new(4));
        assert_eq!(catalog.books.find_by_id(created.id).await?, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn create_with_dangling_reference_persists_nothing() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;
        let res = catalog
            .books
            .create(CreateBook::new(
                "Orphan".into(),
                AuthorId::new(99),
                GenreId::new(1),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        let res = catalog
            .books
            .create(CreateBook::new(
                "Orphan".into(),
                AuthorId::new(1),
                GenreId::new(99),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        assert_eq!(catalog.books.find_all().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_every_mutable_field() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;
        let id = BookId::new(1);
        catalog
            .books
            .update(UpdateBook::new(
                id,
                "Updated Book 1".into(),
                AuthorId::new(2),
                GenreId::new(2),
            ))
            .await?;

        let expected = Book {
            id,
            title: "Updated Book 1".into(),
            author_id: AuthorId::new(2),
            genre_id: GenreId::new(2),
        };
        assert_eq!(catalog.books.find_by_id(id).await?, Some(expected));
        Ok(())
    }

    #[tokio::test]
    async fn update_with_dangling_reference_keeps_the_row() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;
        let id = BookId::new(1);
        let before = catalog.books.find_by_id(id).await?;
        let res = catalog
            .books
            .update(UpdateBook::new(
                id,
                "Book 1".into(),
                AuthorId::new(1),
                GenreId::new(42),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        assert_eq!(catalog.books.find_by_id(id).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_lookup_is_not_found() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;
        let id = BookId::new(1);
        catalog.books.delete(DeleteBook::new(id)).await?;
        assert!(catalog.books.find_by_id(id).await?.is_none());

        let res = catalog.books.delete(DeleteBook::new(id)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn referenced_authors_and_genres_cannot_be_deleted() -> anyhow::Result<()> {
        let catalog = seeded_catalog().await?;

        let res = catalog
            .authors
            .delete(DeleteAuthor::new(AuthorId::new(1)))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));
        let res = catalog
            .genres
            .delete(DeleteGenre::new(GenreId::new(2)))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));

        assert!(catalog.authors.find_by_id(AuthorId::new(1)).await?.is_some());
        assert!(catalog.genres.find_by_id(GenreId::new(2)).await?.is_some());
        Ok(())
    }
}
