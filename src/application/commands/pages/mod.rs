mod admin;
mod create;
mod service;
mod update;

pub use admin::{
    DateChangeOutcome, ResetSlugCommand, ResetSummaryCommand, SetCreatedDateCommand,
    SetUpdatedDateCommand, SlugResetOutcome, SummaryResetOutcome,
};
pub use create::CreatePageCommand;
pub use service::PageCommandService;
pub use update::UpdatePageCommand;
