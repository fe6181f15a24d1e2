//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the path syntax can be compiled
//! - Validate value ranges (log level, non-empty names)
//! - Detect conflicting routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Conflicts use the same shape rule as the router

use thiserror::Error;

use crate::config::schema::RegistryConfig;
use crate::observability::logging::is_valid_level;
use crate::routing::{Method, PathSyntax, RouteError};

/// A single semantic problem in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("router: {0}")]
    Syntax(#[source] RouteError),

    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("route #{index}: empty path")]
    EmptyPath { index: usize },

    #[error("route #{index}: empty handler name")]
    EmptyHandler { index: usize },

    #[error("route #{index}: empty middleware name")]
    EmptyMiddleware { index: usize },

    #[error("route #{index}: {method} {path} conflicts with route #{existing}")]
    Conflict {
        index: usize,
        existing: usize,
        method: Method,
        path: String,
    },
}

/// Validate `config`, collecting every error found.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let syntax = match PathSyntax::from_config(&config.router) {
        Ok(syntax) => Some(syntax),
        Err(err) => {
            errors.push(ValidationError::Syntax(err));
            None
        }
    };

    if !is_valid_level(&config.observability.log_level) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    let mut seen: Vec<(Method, String)> = Vec::with_capacity(config.routes.len());

    for (index, route) in config.routes.iter().enumerate() {
        if route.path.trim().is_empty() {
            errors.push(ValidationError::EmptyPath { index });
        }
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler { index });
        }
        if route.middleware.iter().any(|name| name.trim().is_empty()) {
            errors.push(ValidationError::EmptyMiddleware { index });
        }

        // Conflicts are only meaningful once the syntax compiles
        if let Some(syntax) = &syntax {
            let path = syntax.normalize(&route.path);
            let existing = seen
                .iter()
                .position(|(method, other)| *method == route.method && syntax.same_shape(other, &path));
            seen.push((route.method, path.clone()));

            if let Some(existing) = existing {
                errors.push(ValidationError::Conflict {
                    index,
                    existing,
                    method: route.method,
                    path,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
