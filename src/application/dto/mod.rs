pub mod auth;
pub mod pages;
pub mod pagination;
pub mod site_options;
pub mod tags;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use pages::PageDto;
pub use pagination::Paged;
pub use site_options::SiteOptionDto;
pub use tags::{TagDto, TagWithPagesDto};
