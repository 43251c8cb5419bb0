use serde::{Deserialize, Serialize};

/// Declares a store-assigned integer id. The wire and column
/// representations are both the bare integer.
macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i64);

        impl $id_type {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn raw(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(AuthorId);
define_id!(GenreId);
define_id!(BookId);
