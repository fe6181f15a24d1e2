//! Configuration schema definitions.
//!
//! This module defines the manifest structure read by the CLI and by hosts
//! that prefer declaring routes in a file. All types derive Serde traits.

use serde::{Deserialize, Serialize};

use crate::routing::path::{DEFAULT_DELIMITER, DEFAULT_PARAMETER_PATTERN};
use crate::routing::Method;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path syntax used by the route table.
    pub router: RouterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Routes to register, in order.
    pub routes: Vec<RouteConfig>,
}

/// Path syntax configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Segment delimiter (default: `/`).
    pub delimiter: char,

    /// Placeholder regex with exactly one capture group for the name.
    pub parameter_pattern: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            parameter_pattern: DEFAULT_PARAMETER_PATTERN.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// One manifest route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// HTTP method token.
    pub method: Method,

    /// Path template, e.g. `/users/{id}`.
    pub path: String,

    /// Handler name reported when the route resolves.
    pub handler: String,

    /// Named middleware run before the handler.
    #[serde(default)]
    pub middleware: Vec<String>,
}
