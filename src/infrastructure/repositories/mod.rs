mod sqlite_option;
mod sqlite_page;
mod sqlite_tag;

pub use sqlite_option::SqliteSiteOptionRepository;
pub use sqlite_page::{SqlitePageReadRepository, SqlitePageWriteRepository};
pub use sqlite_tag::SqliteTagRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}
