//! Thing model: a reference to an entity in the knowledge graph.

use serde::Serialize;

/// Entity kinds that have a public dereference URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Person,
    Content,
}

impl EntityType {
    /// Path segment of this type's public API.
    pub fn api_path(&self) -> &'static str {
        match self {
            EntityType::Person => "people",
            EntityType::Content => "content",
        }
    }
}

/// A reference to a graph entity.
///
/// Built only by the result mapper from engine rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    /// Canonical identity URI derived from the entity UUID.
    pub id: String,
    /// Type-qualified dereference URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<String>,
}
