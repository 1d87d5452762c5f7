//! Outcome of a read query: the rows plus whether anything qualified.

/// Result list of a successful query.
///
/// `found` is false exactly when the query succeeded with zero qualifying
/// rows; it is never used to signal an engine failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<T> {
    pub items: Vec<T>,
    pub found: bool,
}

impl<T> Lookup<T> {
    /// Wraps query results, marking them found when non-empty.
    pub fn from_items(items: Vec<T>) -> Self {
        let found = !items.is_empty();
        Self { items, found }
    }

    /// A successful query with no qualifying rows.
    pub fn not_found() -> Self {
        Self {
            items: Vec::new(),
            found: false,
        }
    }
}
