//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (setup phase):
//!     method + raw path + endpoint
//!     → path.rs (normalize)
//!     → router.rs (shape conflict check)
//!     → middleware.rs (compose middleware around the action)
//!     → Route appended to the table
//!
//! Lookup (per request):
//!     method + raw path
//!     → path.rs (normalize)
//!     → router.rs (exact pass, then parameterized pass)
//!     → matcher.rs (segment walk, parameter binding)
//!     → Match { route, params } or MatchError::NotFound
//! ```
//!
//! # Design Decisions
//! - Tables are built during single-threaded setup, then only read
//! - Lookups never mutate shared state; concurrent reads are safe
//! - The router stores actions but never invokes them

pub mod action;
pub mod error;
pub mod group;
pub mod matcher;
pub mod method;
pub mod middleware;
pub mod params;
pub mod path;
pub mod route;
pub mod router;

pub use action::{Action, ActionFuture, BoxError, Endpoint, Middleware};
pub use error::{MatchError, RouteError};
pub use group::Group;
pub use method::{Method, ParseMethodError};
pub use middleware::compose;
pub use params::Params;
pub use path::{normalize, PathSyntax};
pub use route::{Match, Route};
pub use router::Router;
