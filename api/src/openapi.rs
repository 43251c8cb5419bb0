use utoipa::OpenApi;

use crate::{handler, model};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookstore API", description = "CRUD over the bookstore catalog."),
    paths(
        handler::health::health_check,
        handler::health::health_check_db,
        handler::author::register_author,
        handler::author::show_author_list,
        handler::author::show_author,
        handler::author::update_author,
        handler::author::delete_author,
        handler::genre::register_genre,
        handler::genre::show_genre_list,
        handler::genre::show_genre,
        handler::genre::update_genre,
        handler::genre::delete_genre,
        handler::book::register_book,
        handler::book::show_book_list,
        handler::book::show_book,
        handler::book::update_book,
        handler::book::delete_book,
    ),
    components(schemas(
        model::author::CreateAuthorRequest,
        model::author::UpdateAuthorRequest,
        model::author::AuthorResponse,
        model::genre::CreateGenreRequest,
        model::genre::UpdateGenreRequest,
        model::genre::GenreResponse,
        model::book::CreateBookRequest,
        model::book::UpdateBookRequest,
        model::book::BookResponse,
    )),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "authors", description = "Authors"),
        (name = "genres", description = "Genres"),
        (name = "books", description = "Books, each referencing one author and one genre"),
    )
)]
pub struct ApiDoc;
