// src/domain/tag/services.rs
//
// Pure set arithmetic over tag names. Persistence (looking names up,
// creating missing tags, touching the association table) stays with the
// caller so the reconciliation itself is testable in isolation.
use crate::domain::tag::entity::Tag;
use crate::domain::tag::value_objects::TagName;
use std::collections::BTreeSet;

/// Parse a comma-separated tag list: split on commas, trim each piece, drop
/// empties, deduplicate by exact string equality. Order is irrelevant.
pub fn parse_tag_csv(raw: &str) -> BTreeSet<TagName> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| TagName::new(piece).ok())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReconciliation {
    /// Names the entry should gain. Some may not exist as tags yet; the
    /// caller creates those lazily.
    pub to_add: BTreeSet<TagName>,
    /// Currently attached tags the entry should lose.
    pub to_remove: Vec<Tag>,
}

impl TagReconciliation {
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compare the requested name set against the currently attached tags:
/// `to_remove = current − requested`, `to_add = requested − current`.
pub fn reconcile(current: &[Tag], requested: &BTreeSet<TagName>) -> TagReconciliation {
    let current_names: BTreeSet<&TagName> = current.iter().map(|tag| &tag.name).collect();

    let to_add = requested
        .iter()
        .filter(|name| !current_names.contains(name))
        .cloned()
        .collect();

    let to_remove = current
        .iter()
        .filter(|tag| !requested.contains(&tag.name))
        .cloned()
        .collect();

    TagReconciliation { to_add, to_remove }
}
