use derive_new::new;

use crate::model::id::AuthorId;

#[derive(Debug, new)]
pub struct CreateAuthor {
    pub name: String,
}

#[derive(Debug, new)]
pub struct UpdateAuthor {
    pub author_id: AuthorId,
    pub name: String,
}

#[derive(Debug, new)]
pub struct DeleteAuthor {
    pub author_id: AuthorId,
}
