mod service;

pub use service::{
    ClearOptionCommand, ClearedOptionOutcome, OptionChangeOutcome, SetOptionCommand,
    SiteOptionCommandService,
};
