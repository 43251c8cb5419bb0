use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{genre::event::DeleteGenre, id::GenreId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::genre::{GenreResponse, CreateGenreRequest, UpdateGenreRequest};

#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "The created genre", body = GenreResponse),
        (status = 400, description = "Malformed or invalid body"),
    )
)]
#[axum::debug_handler]
pub async fn register_genre(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateGenreRequest>, AppError>,
) -> AppResult<(StatusCode, Json<GenreResponse>)> {
    req.validate(&())?;

    registry
        .genre_repository()
        .create(req.into())
        .await
        .map(|genre| (StatusCode::CREATED, Json(genre.into())))
}

#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses((status = 200, description = "Every genre", body = [GenreResponse]))
)]
#[axum::debug_handler]
pub async fn show_genre_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<GenreResponse>>> {
    registry
        .genre_repository()
        .find_all()
        .await
        .map(|v| v.into_iter().map(GenreResponse::from).collect::<Vec<_>>())
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/genres/{genre_id}",
    tag = "genres",
    params(("genre_id" = i64, Path, description = "Genre id")),
    responses(
        (status = 200, description = "The genre", body = GenreResponse),
        (status = 404, description = "No such genre"),
    )
)]
#[axum::debug_handler]
pub async fn show_genre(
    WithRejection(Path(genre_id), _): WithRejection<Path<GenreId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GenreResponse>> {
    registry
        .genre_repository()
        .find_by_id(genre_id)
        .await
        .and_then(|genre| match genre {
            Some(genre) => Ok(Json(genre.into())),
            None => Err(AppError::EntityNotFound("specified genre not found".into())),
        })
}

#[utoipa::path(
    put,
    path = "/genres/{genre_id}",
    tag = "genres",
    params(("genre_id" = i64, Path, description = "Genre id")),
    request_body = UpdateGenreRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Route id and body id differ, or invalid body"),
        (status = 404, description = "No such genre"),
    )
)]
#[axum::debug_handler]
pub async fn update_genre(
    WithRejection(Path(genre_id), _): WithRejection<Path<GenreId>, AppError>,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateGenreRequest>, AppError>,
) -> AppResult<StatusCode> {
    if genre_id != req.id {
        return Err(AppError::BadRequest(format!(
            "route id {genre_id} does not match body id {}",
            req.id
        )));
    }
    req.validate(&())?;

    registry
        .genre_repository()
        .update(req.into())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/genres/{genre_id}",
    tag = "genres",
    params(("genre_id" = i64, Path, description = "Genre id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such genre"),
        (status = 409, description = "Books are still assigned to the genre"),
    )
)]
#[axum::debug_handler]
pub async fn delete_genre(
    WithRejection(Path(genre_id), _): WithRejection<Path<GenreId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .genre_repository()
        .delete(DeleteGenre::new(genre_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
