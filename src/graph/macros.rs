//! Macro for convenient Cypher query construction.

/// Builds a parameterised query against a graph executor.
///
/// Parameter names are taken from the identifiers, so `uuid = subject`
/// binds `$uuid`.
///
/// ```ignore
/// use sixdegrees::graph::cypher;
///
/// let rows = cypher!(
///     graph,
///     "MATCH (p:Person {prefUUID: $uuid}) RETURN p.prefLabel AS prefLabel LIMIT $limit",
///     uuid = subject,
///     limit = 10,
/// )
/// .fetch_all()
/// .await?;
/// ```
#[macro_export]
macro_rules! cypher {
    // Query without parameters
    ($graph:expr, $query:expr) => {
        $graph.query($query)
    };
    // Query with parameters
    ($graph:expr, $query:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $graph.query($query)$(.param(stringify!($name), $value))+
    };
}
