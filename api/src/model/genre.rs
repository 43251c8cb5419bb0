use garde::Validate;
use kernel::model::{
    genre::{
        event::{CreateGenre, UpdateGenre},
        Genre,
    },
    id::GenreId,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGenreRequest {
    #[garde(length(min = 1))]
    pub name: String,
}

impl From<CreateGenreRequest> for CreateGenre {
    fn from(value: CreateGenreRequest) -> Self {
        let CreateGenreRequest { name } = value;
        CreateGenre::new(name)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGenreRequest {
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub id: GenreId,
    #[garde(length(min = 1))]
    pub name: String,
}

impl From<UpdateGenreRequest> for UpdateGenre {
    fn from(value: UpdateGenreRequest) -> Self {
        let UpdateGenreRequest { id, name } = value;
        UpdateGenre::new(id, name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreResponse {
    #[schema(value_type = i64)]
    pub id: GenreId,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(value: Genre) -> Self {
        let Genre { id, name } = value;
        Self { id, name }
    }
}
