pub mod author;
pub mod book;
pub mod genre;
pub mod health;
