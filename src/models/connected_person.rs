//! Connected person and content sample models.

use serde::Serialize;

use super::Thing;

/// A content item co-mentioning the subject and a connected person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Content UUID.
    pub id: String,
    pub api_url: String,
    pub title: String,
}

/// A person co-mentioned with the query subject.
///
/// `count` is the number of distinct content items in the window that
/// mention both; `content` is a bounded, deterministically ordered sample
/// of those items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectedPerson {
    pub person: Thing,
    pub count: i64,
    pub content: Vec<Content>,
}
