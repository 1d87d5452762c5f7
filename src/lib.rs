//! Public Six Degrees API
//!
//! Read-only relationship discovery over the content/person graph:
//! people co-mentioned with a subject, and people ranked by mentions,
//! both within a bounded publish-date window.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod http;
pub mod models;
pub mod params;
pub mod repositories;
pub mod services;
pub mod window;
