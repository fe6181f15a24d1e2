//! In-process HTTP route registry.
//!
//! Stores (method, path template, action) tuples and resolves an incoming
//! (method, path) pair to the registered action plus the parameters bound by
//! `{name}` placeholders. Transport, request and response types belong to the
//! host; the router only hands back what was registered.
//!
//! # Architecture Overview
//!
//! ```text
//!     setup phase                                   request time
//!  ┌───────────────┐                           ┌───────────────────┐
//!  │ manifest.rs / │  register(method, path,   │ host HTTP layer   │
//!  │ host code     │──────── endpoint) ───────▶│ find(method, path)│
//!  └───────────────┘            │              └─────────┬─────────┘
//!                               ▼                        ▼
//!                    ┌─────────────────────────────────────────────┐
//!                    │                  routing                     │
//!                    │  path ─▶ router (table) ─▶ matcher           │
//!                    │            ▲                                 │
//!                    │  middleware (compose around the action)      │
//!                    └─────────────────────────────────────────────┘
//!                               │                        │
//!                               ▼                        ▼
//!                    ┌──────────────────┐     Match { route, params }
//!                    │ config / observa-│     or MatchError::NotFound
//!                    │ bility           │
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use route_registry::{Action, Method, Router};
//!
//! let mut router = Router::new();
//! router
//!     .get("/users/{id}", Action::new(|id: u32| async move { Ok(id + 1) }))
//!     .unwrap();
//!
//! let found = router.find(Method::Get, "/users/42/").unwrap();
//! assert_eq!(found.params.get("id"), Some("42"));
//! ```

// Core subsystem
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod manifest;
pub mod observability;

pub use config::RegistryConfig;
pub use routing::{
    compose, Action, BoxError, Endpoint, Group, Match, MatchError, Method, Middleware, Params,
    PathSyntax, Route, RouteError, Router,
};
