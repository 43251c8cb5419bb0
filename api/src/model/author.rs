use garde::Validate;
use kernel::model::{
    author::{
        event::{CreateAuthor, UpdateAuthor},
        Author,
    },
    id::AuthorId,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Any `id` in the body is ignored; the store assigns one.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[garde(length(min = 1))]
    pub name: String,
}

impl From<CreateAuthorRequest> for CreateAuthor {
    fn from(value: CreateAuthorRequest) -> Self {
        let CreateAuthorRequest { name } = value;
        CreateAuthor::new(name)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    #[garde(skip)]
    #[schema(value_type = i64)]
    pub id: AuthorId,
    #[garde(length(min = 1))]
    pub name: String,
}

impl From<UpdateAuthorRequest> for UpdateAuthor {
    fn from(value: UpdateAuthorRequest) -> Self {
        let UpdateAuthorRequest { id, name } = value;
        UpdateAuthor::new(id, name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    #[schema(value_type = i64)]
    pub id: AuthorId,
    pub name: String,
}

impl From<Author> for AuthorResponse {
    fn from(value: Author) -> Self {
        let Author { id, name } = value;
        Self { id, name }
    }
}
