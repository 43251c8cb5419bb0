use kernel::model::{genre::Genre, id::GenreId};

#[derive(sqlx::FromRow)]
pub struct GenreRow {
    pub genre_id: GenreId,
    pub name: String,
}

impl From<GenreRow> for Genre {
    fn from(value: GenreRow) -> Self {
        let GenreRow { genre_id, name } = value;
        Self { id: genre_id, name }
    }
}
