use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{author::event::DeleteAuthor, id::AuthorId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::author::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};

#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "The created author", body = AuthorResponse),
        (status = 400, description = "Malformed or invalid body"),
    )
)]
#[axum::debug_handler]
pub async fn register_author(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateAuthorRequest>, AppError>,
) -> AppResult<(StatusCode, Json<AuthorResponse>)> {
    req.validate(&())?;

    registry
        .author_repository()
        .create(req.into())
        .await
        .map(|author| (StatusCode::CREATED, Json(author.into())))
}

#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses((status = 200, description = "Every author", body = [AuthorResponse]))
)]
#[axum::debug_handler]
pub async fn show_author_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<AuthorResponse>>> {
    registry
        .author_repository()
        .find_all()
        .await
        .map(|v| v.into_iter().map(AuthorResponse::from).collect::<Vec<_>>())
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/authors/{author_id}",
    tag = "authors",
    params(("author_id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author", body = AuthorResponse),
        (status = 404, description = "No such author"),
    )
)]
#[axum::debug_handler]
pub async fn show_author(
    WithRejection(Path(author_id), _): WithRejection<Path<AuthorId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AuthorResponse>> {
    registry
        .author_repository()
        .find_by_id(author_id)
        .await
        .and_then(|author| match author {
            Some(author) => Ok(Json(author.into())),
            None => Err(AppError::EntityNotFound("specified author not found".into())),
        })
}

#[utoipa::path(
    put,
    path = "/authors/{author_id}",
    tag = "authors",
    params(("author_id" = i64, Path, description = "Author id")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Route id and body id differ, or invalid body"),
        (status = 404, description = "No such author"),
    )
)]
#[axum::debug_handler]
pub async fn update_author(
    WithRejection(Path(author_id), _): WithRejection<Path<AuthorId>, AppError>,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateAuthorRequest>, AppError>,
) -> AppResult<StatusCode> {
    if author_id != req.id {
        return Err(AppError::BadRequest(format!(
            "route id {author_id} does not match body id {}",
            req.id
        )));
    }
    req.validate(&())?;

    registry
        .author_repository()
        .update(req.into())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/authors/{author_id}",
    tag = "authors",
    params(("author_id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such author"),
        (status = 409, description = "The author still has books"),
    )
)]
#[axum::debug_handler]
pub async fn delete_author(
    WithRejection(Path(author_id), _): WithRejection<Path<AuthorId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .author_repository()
        .delete(DeleteAuthor::new(author_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
