use super::id::GenreId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}
