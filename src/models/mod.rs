//! Public entity shapes returned by the relationship endpoints.

mod connected_person;
mod lookup;
mod thing;

pub use connected_person::{ConnectedPerson, Content};
pub use lookup::Lookup;
pub use thing::{EntityType, Thing};
