//! Six degrees query service.
//!
//! The HTTP layer talks to [`SixDegreesDriver`] only; [`CypherDriver`] is the
//! graph-backed implementation and tests substitute their own.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::{Graph, GraphClient};
use crate::models::{ConnectedPerson, Lookup, Thing};
use crate::params::{ConnectedPeopleParams, MostMentionedParams};
use crate::repositories::PeopleRepository;
use crate::services::ResultMapper;

/// Read operations exposed to the boundary layer.
#[async_trait]
pub trait SixDegreesDriver: Send + Sync {
    /// People co-mentioned with the subject inside the window.
    async fn connected_people(
        &self,
        params: &ConnectedPeopleParams,
    ) -> Result<Lookup<ConnectedPerson>, AppError>;

    /// People ranked by mentions inside the window.
    async fn most_mentioned(&self, params: &MostMentionedParams)
        -> Result<Lookup<Thing>, AppError>;

    /// Probes the graph engine with a trivial statement.
    async fn check_connectivity(&self) -> Result<(), AppError>;
}

/// [`SixDegreesDriver`] backed by a Cypher graph engine.
pub struct CypherDriver<C: GraphClient> {
    graph: Arc<Graph<C>>,
    people: PeopleRepository<Graph<C>>,
    mapper: ResultMapper,
}

impl<C: GraphClient> CypherDriver<C> {
    pub fn new(graph: Graph<C>, mapper: ResultMapper) -> Self {
        let graph = Arc::new(graph);
        Self {
            people: PeopleRepository::new(graph.clone()),
            graph,
            mapper,
        }
    }
}

#[async_trait]
impl<C: GraphClient + 'static> SixDegreesDriver for CypherDriver<C> {
    async fn connected_people(
        &self,
        params: &ConnectedPeopleParams,
    ) -> Result<Lookup<ConnectedPerson>, AppError> {
        let rows = self.people.connected_people(params).await.map_err(|e| {
            tracing::error!(uuid = %params.subject_uuid, error = %e, "connected people query failed");
            e
        })?;
        let people = self.mapper.connected_people(&rows)?;

        tracing::debug!(
            uuid = %params.subject_uuid,
            results = people.len(),
            "connected people resolved"
        );
        Ok(Lookup::from_items(people))
    }

    async fn most_mentioned(
        &self,
        params: &MostMentionedParams,
    ) -> Result<Lookup<Thing>, AppError> {
        let rows = self.people.most_mentioned(params).await.map_err(|e| {
            tracing::error!(error = %e, "most mentioned query failed");
            e
        })?;
        let things = self.mapper.most_mentioned(&rows)?;

        tracing::debug!(results = things.len(), "most mentioned resolved");
        Ok(Lookup::from_items(things))
    }

    async fn check_connectivity(&self) -> Result<(), AppError> {
        self.graph.ping().await
    }
}
