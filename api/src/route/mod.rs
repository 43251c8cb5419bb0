use axum::Router;
use registry::AppRegistry;

pub mod author;
pub mod book;
pub mod genre;
pub mod health;

pub fn build_routers() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(author::build_author_routers())
        .merge(genre::build_genre_routers())
        .merge(book::build_book_routers())
}
