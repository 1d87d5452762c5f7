//! Business logic services for the six degrees queries.
//!
//! Services orchestrate the repositories and map raw rows into the
//! public entity shapes.

mod mapper;
mod six_degrees;

pub use mapper::ResultMapper;
pub use six_degrees::{CypherDriver, SixDegreesDriver};
