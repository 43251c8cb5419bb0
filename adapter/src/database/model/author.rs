use kernel::model::{author::Author, id::AuthorId};

#[derive(sqlx::FromRow)]
pub struct AuthorRow {
    pub author_id: AuthorId,
    pub name: String,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        let AuthorRow { author_id, name } = value;
        Self { id: author_id, name }
    }
}
