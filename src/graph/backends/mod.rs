//! Backend implementations for graph engines.
//!
//! Each backend implements [`CypherExecutor`](crate::graph::CypherExecutor)
//! and [`GraphClient`](crate::graph::GraphClient).
//!
//! | Backend | Module |
//! |---------|--------|
//! | Neo4j (Bolt) | [`neo4j`] |

pub mod neo4j;
