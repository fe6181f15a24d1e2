//! Route tables built from a configuration manifest.
//!
//! # Responsibilities
//! - Register every manifest route on a fresh router
//! - Resolve middleware names to the built-in middleware
//! - Give each handler an action that reports what it resolved
//!
//! # Design Decisions
//! - Handlers are names, not code: the action echoes `{handler, params}` as JSON
//! - Manifest order is registration order, so first-match ties follow the file

use serde_json::{json, Value};
use thiserror::Error;

use crate::config::RegistryConfig;
use crate::routing::{Action, BoxError, Middleware, Params, PathSyntax, RouteError, Router};

/// Router whose actions take the extracted parameters and return JSON.
pub type ManifestRouter = Router<Params, Value>;

/// Middleware names understood in manifests.
pub const BUILTIN_MIDDLEWARE: [&str; 2] = ["trace", "deny"];

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("route #{index}: unknown middleware `{name}`")]
    UnknownMiddleware { index: usize, name: String },
}

/// Look up a built-in middleware by name.
///
/// - `trace` logs the parameters and lets the request through
/// - `deny` rejects every request
pub fn builtin_middleware(name: &str) -> Option<Middleware<Params>> {
    match name {
        "trace" => Some(Action::new(|params: Params| async move {
            tracing::info!(params = ?params, "Dispatching request");
            Ok(())
        })),
        "deny" => Some(Action::new(|_params: Params| async move {
            Err(BoxError::from("request denied by middleware"))
        })),
        _ => None,
    }
}

fn handler_action(handler: String) -> Action<Params, Value> {
    Action::new(move |params: Params| {
        let handler = handler.clone();
        async move { Ok(json!({ "handler": handler, "params": params })) }
    })
}

/// Build a router holding every route in `config`.
pub fn build_router(config: &RegistryConfig) -> Result<ManifestRouter, ManifestError> {
    let syntax = PathSyntax::from_config(&config.router)?;
    let mut router = Router::with_syntax(syntax);

    for (index, route) in config.routes.iter().enumerate() {
        let middleware = route
            .middleware
            .iter()
            .map(|name| {
                builtin_middleware(name).ok_or_else(|| ManifestError::UnknownMiddleware {
                    index,
                    name: name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let action = handler_action(route.handler.clone());
        if middleware.is_empty() {
            router.register(route.method, &route.path, action)?;
        } else {
            router.register(route.method, &route.path, (middleware, action))?;
        }
    }

    tracing::info!(routes = router.len(), "Route table built");
    Ok(router)
}
