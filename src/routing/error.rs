//! Error types for registration and lookup.

use thiserror::Error;

use crate::routing::Method;

/// Errors raised while building a route table.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route with the same method and an equivalent path shape already exists.
    #[error("{method} {path} has already been registered")]
    DuplicateRoute { method: Method, path: String },

    /// The parameter pattern is not a valid regular expression.
    #[error("invalid parameter pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The parameter pattern must capture the parameter name in exactly one group.
    #[error("parameter pattern `{pattern}` has {groups} capture groups, expected exactly 1")]
    PatternGroups { pattern: String, groups: usize },

    /// Whitespace is stripped during normalization and cannot delimit segments.
    #[error("invalid path delimiter {0:?}")]
    InvalidDelimiter(char),
}

/// A failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No registered route matches the method and path.
    #[error("matching route not found")]
    NotFound,
}
