//! Converts raw engine rows into the public response shapes.

use crate::error::AppError;
use crate::models::{ConnectedPerson, Content, EntityType, Thing};
use crate::repositories::{ConnectedPersonRow, ContentRow, MentionRow};

/// Builds identity and dereference URIs for mapped entities.
#[derive(Debug, Clone)]
pub struct ResultMapper {
    base_url: String,
}

impl ResultMapper {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Canonical identity URI for an entity UUID.
    pub fn id_url(&self, uuid: &str) -> String {
        format!("{}/things/{}", self.base_url, uuid)
    }

    /// Type-qualified dereference URL for an entity UUID.
    pub fn api_url(&self, uuid: &str, entity_type: EntityType) -> String {
        format!("{}/{}/{}", self.base_url, entity_type.api_path(), uuid)
    }

    /// Maps a person reference. A row without a UUID cannot be addressed.
    pub fn person(&self, uuid: Option<&str>, pref_label: Option<&str>) -> Result<Thing, AppError> {
        let uuid = uuid
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::Mapping("person row has no uuid".to_string()))?;

        Ok(Thing {
            id: self.id_url(uuid),
            api_url: Some(self.api_url(uuid, EntityType::Person)),
            pref_label: pref_label.map(str::to_string),
        })
    }

    fn content(&self, row: &ContentRow) -> Result<Content, AppError> {
        let uuid = row
            .uuid
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::Mapping("content row has no uuid".to_string()))?;

        Ok(Content {
            id: uuid.to_string(),
            api_url: self.api_url(uuid, EntityType::Content),
            title: row.pref_label.clone().unwrap_or_default(),
        })
    }

    /// Maps connected people rows, preserving engine order.
    pub fn connected_people(
        &self,
        rows: &[ConnectedPersonRow],
    ) -> Result<Vec<ConnectedPerson>, AppError> {
        rows.iter()
            .map(|row| {
                Ok(ConnectedPerson {
                    person: self.person(row.uuid.as_deref(), row.pref_label.as_deref())?,
                    count: row.count,
                    content: row
                        .content_list
                        .iter()
                        .map(|c| self.content(c))
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect()
    }

    /// Maps most mentioned rows, preserving engine order.
    pub fn most_mentioned(&self, rows: &[MentionRow]) -> Result<Vec<Thing>, AppError> {
        rows.iter()
            .map(|row| self.person(row.uuid.as_deref(), row.pref_label.as_deref()))
            .collect()
    }
}
