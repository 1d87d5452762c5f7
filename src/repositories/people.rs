//! People repository: the relationship traversals over content mentions.
//!
//! Each operation is one declarative statement. Counting, content sampling,
//! filtering, ordering and truncation all happen inside the engine.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::AppError;
use crate::graph::{cypher, CypherExecutor, QueryExt, Row};
use crate::params::{ConnectedPeopleParams, MostMentionedParams};

/// People co-mentioned with a subject, with a content sample per person.
///
/// People are keyed by their canonical node reached over `EQUIVALENT_TO`.
/// Content is collected newest-uuid-first so the sample is stable.
pub const CONNECTED_PEOPLE: &str = "
    MATCH (c:Content)
    WHERE c.publishedDateEpoch > $fromDate
      AND c.publishedDateEpoch < $toDate
    MATCH (p:Person {prefUUID: $uuid})<-[:EQUIVALENT_TO]-(:Person)<-[:MENTIONS]-(c)
    MATCH (c)-[:MENTIONS]->(:Person)-[:EQUIVALENT_TO]->(p2:Person)
    WHERE p2 <> p
    WITH DISTINCT c, p2
    ORDER BY c.uuid DESC
    WITH p2,
         count(c) AS cm,
         collect({uuid: c.uuid, prefLabel: c.prefLabel})[0..$contentLimit] AS content
    WHERE cm >= $minimumConnections
    RETURN p2.prefUUID AS uuid,
           p2.prefLabel AS prefLabel,
           cm AS count,
           content AS contentList
    ORDER BY count DESC, uuid ASC
    LIMIT $limit";

/// People ranked by how often content in the window mentions them.
pub const MOST_MENTIONED: &str = "
    MATCH (c:Content)-[a:MENTIONS]->(:Person)-[:EQUIVALENT_TO]->(p:Person)
    WHERE c.publishedDateEpoch > $fromDate
      AND c.publishedDateEpoch < $toDate
    WITH p.prefUUID AS uuid, p.prefLabel AS prefLabel, count(a) AS mentions
    RETURN uuid, prefLabel, mentions
    ORDER BY mentions DESC, uuid ASC
    LIMIT $limit";

/// A content item as returned inside a connected people row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRow {
    pub uuid: Option<String>,
    pub pref_label: Option<String>,
}

/// One connected people result row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedPersonRow {
    pub uuid: Option<String>,
    pub pref_label: Option<String>,
    pub count: i64,
    #[serde(default)]
    pub content_list: Vec<ContentRow>,
}

/// One most mentioned result row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionRow {
    pub uuid: Option<String>,
    pub pref_label: Option<String>,
    pub mentions: i64,
}

/// Repository for the read-only relationship statements.
pub struct PeopleRepository<E: CypherExecutor> {
    graph: Arc<E>,
}

impl<E: CypherExecutor> Clone for PeopleRepository<E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<E: CypherExecutor> PeopleRepository<E> {
    pub fn new(graph: Arc<E>) -> Self {
        Self { graph }
    }

    /// Run the connected people statement.
    ///
    /// Negative limits are sent as 0 so they yield no rows instead of an
    /// engine error; `minimumConnections` is sent as-is.
    pub async fn connected_people(
        &self,
        params: &ConnectedPeopleParams,
    ) -> Result<Vec<ConnectedPersonRow>, AppError> {
        let rows = cypher!(
            self.graph,
            CONNECTED_PEOPLE,
            uuid = &params.subject_uuid,
            fromDate = params.window.from_epoch,
            toDate = params.window.to_epoch,
            minimumConnections = params.minimum_connections,
            contentLimit = params.content_limit.max(0),
            limit = params.result_limit.max(0),
        )
        .fetch_all()
        .await?;

        rows.iter().map(Row::to).collect()
    }

    /// Run the most mentioned statement.
    pub async fn most_mentioned(
        &self,
        params: &MostMentionedParams,
    ) -> Result<Vec<MentionRow>, AppError> {
        let rows = self
            .graph
            .query(MOST_MENTIONED)
            .param("fromDate", params.window.from_epoch)
            .param("toDate", params.window.to_epoch)
            .param("limit", params.result_limit.max(0))
            .fetch_all()
            .await?;

        rows.iter().map(Row::to).collect()
    }
}
