//! Data access layer for graph operations.
//!
//! Repositories own the Cypher text and parameter binding; they return
//! raw decoded rows and leave URI construction to the services layer.

mod people;

pub use people::{
    ConnectedPersonRow, ContentRow, MentionRow, PeopleRepository, CONNECTED_PEOPLE,
    MOST_MENTIONED,
};
