// src/domain/tag/entity.rs
use crate::domain::tag::value_objects::{TagId, TagName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
}
