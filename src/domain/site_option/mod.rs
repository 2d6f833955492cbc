pub mod entity;
pub mod repository;

pub use entity::SiteOption;
pub use repository::SiteOptionRepository;
