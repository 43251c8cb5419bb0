use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        author::AuthorRepositoryImpl, book::BookRepositoryImpl, genre::GenreRepositoryImpl,
        health::HealthCheckRepositoryImpl,
    },
};
use kernel::repository::{
    author::AuthorRepository, book::BookRepository, genre::GenreRepository,
    health::HealthCheckRepository,
};

/// Composition root: every repository shares the same connection pool.
#[derive(Clone)]
pub struct AppRegistryImpl {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    author_repository: Arc<dyn AuthorRepository>,
    genre_repository: Arc<dyn GenreRepository>,
    book_repository: Arc<dyn BookRepository>,
}

impl AppRegistryImpl {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let author_repository = Arc::new(AuthorRepositoryImpl::new(pool.clone()));
        let genre_repository = Arc::new(GenreRepositoryImpl::new(pool.clone()));
        let book_repository = Arc::new(BookRepositoryImpl::new(pool));
        Self {
            health_check_repository,
            author_repository,
            genre_repository,
            book_repository,
        }
    }
}

#[mockall::automock]
pub trait AppRegistryExt {
    fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository>;
    fn author_repository(&self) -> Arc<dyn AuthorRepository>;
    fn genre_repository(&self) -> Arc<dyn GenreRepository>;
    fn book_repository(&self) -> Arc<dyn BookRepository>;
}

impl AppRegistryExt for AppRegistryImpl {
    fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    fn author_repository(&self) -> Arc<dyn AuthorRepository> {
        self.author_repository.clone()
    }

    fn genre_repository(&self) -> Arc<dyn GenreRepository> {
        self.genre_repository.clone()
    }

    fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }
}

pub type AppRegistry = Arc<dyn AppRegistryExt + Send + Sync + 'static>;
