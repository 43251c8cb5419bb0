use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{book::event::DeleteBook, id::BookId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::book::{BookResponse, CreateBookRequest, UpdateBookRequest};

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "The created book", body = BookResponse),
        (status = 400, description = "Malformed or invalid body"),
        (status = 422, description = "Author or genre does not exist"),
    )
)]
#[axum::debug_handler]
pub async fn register_book(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateBookRequest>, AppError>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    req.validate(&())?;

    registry
        .book_repository()
        .create(req.into())
        .await
        .map(|book| (StatusCode::CREATED, Json(book.into())))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses((status = 200, description = "Every book", body = [BookResponse]))
)]
#[axum::debug_handler]
pub async fn show_book_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookResponse>>> {
    registry
        .book_repository()
        .find_all()
        .await
        .map(|v| v.into_iter().map(BookResponse::from).collect::<Vec<_>>())
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = BookResponse),
        (status = 404, description = "No such book"),
    )
)]
#[axum::debug_handler]
pub async fn show_book(
    WithRejection(Path(book_id), _): WithRejection<Path<BookId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookResponse>> {
    registry
        .book_repository()
        .find_by_id(book_id)
        .await
        .and_then(|bc| match bc {
            Some(bc) => Ok(Json(bc.into())),
            None => Err(AppError::EntityNotFound("specified book not found".into())),
        })
}

#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i64, Path, description = "Book id")),
    request_body = UpdateBookRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Route id and body id differ, or invalid body"),
        (status = 404, description = "No such book"),
        (status = 422, description = "Author or genre does not exist"),
    )
)]
#[axum::debug_handler]
pub async fn update_book(
    WithRejection(Path(book_id), _): WithRejection<Path<BookId>, AppError>,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateBookRequest>, AppError>,
) -> AppResult<StatusCode> {
    if book_id != req.id {
        return Err(AppError::BadRequest(format!(
            "route id {book_id} does not match body id {}",
            req.id
        )));
    }
    req.validate(&())?;

    registry
        .book_repository()
        .update(req.into())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such book"),
    )
)]
#[axum::debug_handler]
pub async fn delete_book(
    WithRejection(Path(book_id), _): WithRejection<Path<BookId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .book_repository()
        .delete(DeleteBook::new(book_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
