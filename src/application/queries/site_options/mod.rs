mod service;

pub use service::{ListOptionsQuery, SiteDefaults, SiteInfoDto, SiteOptionQueryService};
