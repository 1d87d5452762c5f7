//! Request parameter resolution.
//!
//! Raw query-string values arrive as strings (empty when absent). They are
//! resolved once into a typed parameter struct per query before any graph
//! statement is issued.

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::window::{resolve_window_at, QueryWindow};

/// Default `limit` for connected people.
pub const DEFAULT_CONNECTED_PEOPLE_LIMIT: i64 = 10;
/// Default `minimumConnections` for connected people.
pub const DEFAULT_MINIMUM_CONNECTIONS: i64 = 5;
/// Default `contentLimit` for connected people.
pub const DEFAULT_CONTENT_LIMIT: i64 = 3;
/// Default `limit` for most mentioned people.
pub const DEFAULT_MOST_MENTIONED_LIMIT: i64 = 20;

/// Parses an optional base-10 integer, falling back to `default` when empty.
///
/// No range checks are applied; zero and negative values pass through.
pub fn resolve_int(param: &'static str, raw: &str, default: i64) -> Result<i64, AppError> {
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<i64>().map_err(|source| AppError::InvalidParam {
        param,
        value: raw.to_string(),
        source,
    })
}

/// First value for `key`, or empty when the key is absent.
fn first_value(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

/// Raw query string of `GET /sixdegrees/connectedPeople`.
#[derive(Debug, Clone, Default)]
pub struct ConnectedPeopleQuery {
    pub uuid: String,
    pub limit: String,
    pub minimum_connections: String,
    pub content_limit: String,
    pub from_date: String,
    pub to_date: String,
}

impl ConnectedPeopleQuery {
    /// Builds the raw query from decoded pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            uuid: first_value(pairs, "uuid"),
            limit: first_value(pairs, "limit"),
            minimum_connections: first_value(pairs, "minimumConnections"),
            content_limit: first_value(pairs, "contentLimit"),
            from_date: first_value(pairs, "fromDate"),
            to_date: first_value(pairs, "toDate"),
        }
    }
}

/// Raw query string of `GET /sixdegrees/mostMentionedPeople`.
#[derive(Debug, Clone, Default)]
pub struct MostMentionedQuery {
    pub limit: String,
    pub from_date: String,
    pub to_date: String,
}

impl MostMentionedQuery {
    /// Builds the raw query from decoded pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            limit: first_value(pairs, "limit"),
            from_date: first_value(pairs, "fromDate"),
            to_date: first_value(pairs, "toDate"),
        }
    }
}

/// Validated parameters for the connected people statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedPeopleParams {
    pub subject_uuid: String,
    pub window: QueryWindow,
    pub result_limit: i64,
    pub minimum_connections: i64,
    pub content_limit: i64,
}

impl ConnectedPeopleParams {
    /// Resolves the raw query relative to `now`.
    ///
    /// Dates are checked first, then `minimumConnections`, `limit` and
    /// `contentLimit`; the first failure is returned.
    pub fn resolve(query: &ConnectedPeopleQuery, now: DateTime<Utc>) -> Result<Self, AppError> {
        let window = resolve_window_at(&query.from_date, &query.to_date, now)?;
        let minimum_connections = resolve_int(
            "minimumConnections",
            &query.minimum_connections,
            DEFAULT_MINIMUM_CONNECTIONS,
        )?;
        let result_limit = resolve_int("limit", &query.limit, DEFAULT_CONNECTED_PEOPLE_LIMIT)?;
        let content_limit =
            resolve_int("contentLimit", &query.content_limit, DEFAULT_CONTENT_LIMIT)?;

        Ok(Self {
            subject_uuid: query.uuid.clone(),
            window,
            result_limit,
            minimum_connections,
            content_limit,
        })
    }
}

/// Validated parameters for the most mentioned statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostMentionedParams {
    pub window: QueryWindow,
    pub result_limit: i64,
}

impl MostMentionedParams {
    /// Resolves the raw query relative to `now`. `limit` is checked before the dates.
    pub fn resolve(query: &MostMentionedQuery, now: DateTime<Utc>) -> Result<Self, AppError> {
        let result_limit = resolve_int("limit", &query.limit, DEFAULT_MOST_MENTIONED_LIMIT)?;
        let window = resolve_window_at(&query.from_date, &query.to_date, now)?;
        Ok(Self {
            window,
            result_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 12, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_resolve_int_empty_uses_default() {
        for default in [
            DEFAULT_CONNECTED_PEOPLE_LIMIT,
            DEFAULT_MINIMUM_CONNECTIONS,
            DEFAULT_CONTENT_LIMIT,
            DEFAULT_MOST_MENTIONED_LIMIT,
        ] {
            assert_eq!(resolve_int("limit", "", default).unwrap(), default);
        }
    }

    #[test]
    fn test_resolve_int_parses_values() {
        assert_eq!(resolve_int("limit", "42", 10).unwrap(), 42);
        assert_eq!(resolve_int("limit", "0", 10).unwrap(), 0);
        assert_eq!(resolve_int("limit", "-3", 10).unwrap(), -3);
    }

    #[test]
    fn test_resolve_int_rejects_non_integers() {
        for raw in ["FAIL", "1.5", "10 ", "0x10", "ten"] {
            let err = resolve_int("contentLimit", raw, 3).unwrap_err();
            match err {
                AppError::InvalidParam { param, value, .. } => {
                    assert_eq!(param, "contentLimit");
                    assert_eq!(value, raw);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_connected_people_defaults() {
        let query = ConnectedPeopleQuery {
            uuid: "12345".to_string(),
            ..Default::default()
        };
        let params = ConnectedPeopleParams::resolve(&query, now()).unwrap();

        assert_eq!(params.subject_uuid, "12345");
        assert_eq!(params.result_limit, 10);
        assert_eq!(params.minimum_connections, 5);
        assert_eq!(params.content_limit, 3);
        assert_eq!(params.window.to_epoch, now().timestamp());
    }

    #[test]
    fn test_connected_people_explicit_values() {
        let query = ConnectedPeopleQuery {
            uuid: "12345".to_string(),
            limit: "5".to_string(),
            minimum_connections: "2".to_string(),
            content_limit: "10".to_string(),
            ..Default::default()
        };
        let params = ConnectedPeopleParams::resolve(&query, now()).unwrap();

        assert_eq!(params.result_limit, 5);
        assert_eq!(params.minimum_connections, 2);
        assert_eq!(params.content_limit, 10);
    }

    #[test]
    fn test_connected_people_reports_dates_before_ints() {
        let query = ConnectedPeopleQuery {
            limit: "FAIL".to_string(),
            from_date: "FAIL".to_string(),
            ..Default::default()
        };
        let err = ConnectedPeopleParams::resolve(&query, now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
    }

    #[test]
    fn test_most_mentioned_reports_limit_before_dates() {
        let query = MostMentionedQuery {
            limit: "FAIL".to_string(),
            from_date: "FAIL".to_string(),
            ..Default::default()
        };
        let err = MostMentionedParams::resolve(&query, now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidParam { param: "limit", .. }));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let query = ConnectedPeopleQuery::from_pairs(&pairs(&[
            ("uuid", "12345"),
            ("limit", "1"),
            ("limit", "2"),
            ("minimumConnections", "3"),
            ("unknown", "x"),
        ]));
        assert_eq!(query.uuid, "12345");
        assert_eq!(query.limit, "1");
        assert_eq!(query.minimum_connections, "3");
        assert_eq!(query.content_limit, "");

        let query = MostMentionedQuery::from_pairs(&pairs(&[
            ("toDate", "2016-12-14"),
            ("toDate", "FAIL"),
        ]));
        assert_eq!(query.to_date, "2016-12-14");
        assert_eq!(query.limit, "");
    }

    #[test]
    fn test_most_mentioned_defaults() {
        let params = MostMentionedParams::resolve(&MostMentionedQuery::default(), now()).unwrap();
        assert_eq!(params.result_limit, 20);
    }
}
