pub mod author;
pub mod book;
pub mod genre;
pub mod health;

/// SQLite reports `FOREIGN KEY constraint failed` for both dangling
/// references on write and restricted deletes.
fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => {
            db.is_foreign_key_violation() || db.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}
