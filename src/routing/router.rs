//! Route table, registration and lookup.
//!
//! # Responsibilities
//! - Store registered routes in insertion order
//! - Reject registrations whose method and path shape already exist
//! - Resolve a (method, path) pair to a route and its parameters
//!
//! # Design Decisions
//! - One table per `Router` value; no process-wide state
//! - Linear scans (tables hold tens to low hundreds of routes)
//! - Exact text match beats any parameterized route
//! - Among parameterized routes the first registered match wins
//! - Lookup never fails with an error; anything unexpected becomes `NotFound`

use crate::observability::metrics;
use crate::routing::group::Group;
use crate::routing::matcher::match_template;
use crate::routing::path::PathSyntax;
use crate::routing::{Endpoint, Match, MatchError, Method, Params, Route, RouteError};

/// Generates one registration shorthand per method.
macro_rules! method_shorthands {
    ($($(#[$doc:meta])* $name:ident => $method:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(
                &mut self,
                path: &str,
                endpoint: impl Into<Endpoint<Req, Res>>,
            ) -> Result<&mut Self, RouteError> {
                self.register(Method::$method, path, endpoint)
            }
        )*
    };
}

pub(crate) use method_shorthands;

/// An in-memory route table.
pub struct Router<Req, Res> {
    routes: Vec<Route<Req, Res>>,
    syntax: PathSyntax,
}

impl<Req, Res> Default for Router<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> Clone for Router<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            syntax: self.syntax.clone(),
        }
    }
}

impl<Req, Res> std::fmt::Debug for Router<Req, Res> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("syntax", &self.syntax)
            .finish()
    }
}

impl<Req, Res> Router<Req, Res> {
    /// Create an empty router using `/` and `{name}` placeholders.
    pub fn new() -> Self {
        Self::with_syntax(PathSyntax::default())
    }

    pub fn with_syntax(syntax: PathSyntax) -> Self {
        Self {
            routes: Vec::new(),
            syntax,
        }
    }

    pub fn syntax(&self) -> &PathSyntax {
        &self.syntax
    }

    /// Registered routes in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<Req, Res>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// True if a route with `method` and the same shape as `path` exists.
    ///
    /// `path` must already be normalized.
    pub fn has_conflict(&self, method: Method, path: &str) -> bool {
        self.routes
            .iter()
            .any(|route| route.method() == method && self.syntax.same_shape(route.path(), path))
    }

    /// Resolve `method` and `path` to a route.
    ///
    /// An exact textual match is returned with empty parameters before any
    /// parameterized route is considered. Otherwise the first route, in
    /// registration order, whose every segment matches wins.
    pub fn find(&self, method: Method, path: &str) -> Result<Match<'_, Req, Res>, MatchError> {
        let path = self.syntax.normalize(path);

        if let Some(route) = self
            .routes
            .iter()
            .find(|route| route.method() == method && route.path() == path)
        {
            tracing::debug!(%method, path = %path, route = %route.path(), "Exact route match");
            metrics::record_lookup(method, "exact");
            return Ok(Match {
                route,
                params: Params::new(),
            });
        }

        let segments = self.syntax.segment_count(&path);
        let candidates = self.routes.iter().filter(|route| {
            route.method() == method && self.syntax.segment_count(route.path()) == segments
        });

        for route in candidates {
            match match_template(&self.syntax, route.path(), &path) {
                Ok(Some(params)) => {
                    tracing::debug!(
                        %method,
                        path = %path,
                        route = %route.path(),
                        params = params.len(),
                        "Parameterized route match"
                    );
                    metrics::record_lookup(method, "param");
                    return Ok(Match { route, params });
                }
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(
                        %method,
                        path = %path,
                        route = %route.path(),
                        error = %err,
                        "Route matching failed, treating as not found"
                    );
                    metrics::record_lookup(method, "not_found");
                    return Err(MatchError::NotFound);
                }
            }
        }

        tracing::debug!(%method, path = %path, "No route matched");
        metrics::record_lookup(method, "not_found");
        Err(MatchError::NotFound)
    }
}

impl<Req, Res> Router<Req, Res>
where
    Req: Clone + Send + 'static,
    Res: Send + 'static,
{
    /// Register `endpoint` under `method` and `path`.
    ///
    /// Fails with [`RouteError::DuplicateRoute`] when the method and path
    /// shape are already taken; the table is left unchanged in that case.
    pub fn register(
        &mut self,
        method: Method,
        path: &str,
        endpoint: impl Into<Endpoint<Req, Res>>,
    ) -> Result<&mut Self, RouteError> {
        let path = self.syntax.normalize(path);

        if self.has_conflict(method, &path) {
            tracing::debug!(%method, path = %path, "Duplicate route rejected");
            metrics::record_duplicate(method);
            return Err(RouteError::DuplicateRoute { method, path });
        }

        let action = endpoint.into().into_action();
        tracing::debug!(%method, path = %path, "Route registered");
        metrics::record_registration(method);
        self.routes.push(Route::new(method, path, action));

        Ok(self)
    }

    method_shorthands! {
        /// Register a CONNECT route.
        connect => Connect,
        /// Register a DELETE route.
        delete => Delete,
        /// Register a GET route.
        get => Get,
        /// Register a HEAD route.
        head => Head,
        /// Register an OPTIONS route.
        options => Options,
        /// Register a PATCH route.
        patch => Patch,
        /// Register a POST route.
        post => Post,
        /// Register a PUT route.
        put => Put,
        /// Register a TRACE route.
        trace => Trace,
    }

    /// Register routes under a common path prefix.
    pub fn group(&mut self, prefix: &str) -> Group<'_, Req, Res> {
        Group::new(self, prefix.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Action, BoxError};

    fn named(name: &'static str) -> Action<(), &'static str> {
        Action::new(move |_req: ()| async move { Ok(name) })
    }

    #[test]
    fn test_register_normalizes_path() {
        let mut router = Router::new();
        router.get(" /users/ ", named("users")).unwrap();

        let route = router.routes().next().unwrap();
        assert_eq!(route.path(), "/users");
        assert_eq!(route.method(), Method::Get);
    }

    #[test]
    fn test_registration_preserves_order() {
        let mut router = Router::new();
        router
            .get("/a", named("a"))
            .unwrap()
            .post("/b", named("b"))
            .unwrap()
            .put("/c", named("c"))
            .unwrap();

        let paths: Vec<_> = router.routes().map(|r| r.path().to_string()).collect();
        assert_eq!(paths, ["/a", "/b", "/c"]);
        assert_eq!(router.len(), 3);
    }

    #[test]
    fn test_every_method_shorthand() {
        let mut router = Router::new();
        router.connect("/x", named("x")).unwrap();
        router.delete("/x", named("x")).unwrap();
        router.get("/x", named("x")).unwrap();
        router.head("/x", named("x")).unwrap();
        router.options("/x", named("x")).unwrap();
        router.patch("/x", named("x")).unwrap();
        router.post("/x", named("x")).unwrap();
        router.put("/x", named("x")).unwrap();
        router.trace("/x", named("x")).unwrap();

        let methods: Vec<_> = router.routes().map(|r| r.method()).collect();
        assert_eq!(methods, Method::ALL);
    }

    #[test]
    fn test_same_path_different_method_is_allowed() {
        let mut router = Router::new();
        router.get("/items/{x}", named("get")).unwrap();
        router.delete("/items/{x}", named("delete")).unwrap();
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn test_duplicate_leaves_table_unchanged() {
        let mut router = Router::new();
        router.get("/items", named("first")).unwrap();

        let err = router.get("/items/", named("second")).unwrap_err();
        assert!(matches!(
            err,
            RouteError::DuplicateRoute { method: Method::Get, ref path } if path == "/items"
        ));
        assert_eq!(err.to_string(), "GET /items has already been registered");
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_has_conflict_ignores_segment_count() {
        let mut router = Router::new();
        router.get("/a/{b}", named("ab")).unwrap();

        assert!(router.has_conflict(Method::Get, "/a/{c}"));
        assert!(!router.has_conflict(Method::Get, "/a/{b}/c"));
        assert!(!router.has_conflict(Method::Get, "/a"));
        assert!(!router.has_conflict(Method::Post, "/a/{b}"));
    }

    #[test]
    fn test_find_on_empty_router() {
        let router: Router<(), &str> = Router::new();
        assert_eq!(router.find(Method::Delete, "/unregistered").unwrap_err(), MatchError::NotFound);
    }

    #[test]
    fn test_find_root() {
        let mut router = Router::new();
        router.get("/", named("root")).unwrap();

        assert_eq!(router.find(Method::Get, "").unwrap().route.path(), "/");
        assert_eq!(router.find(Method::Get, "/").unwrap().route.path(), "/");
    }

    #[test]
    fn test_find_swallows_matching_errors() {
        let syntax = PathSyntax::new('/', r"\{(\w+)?\}").unwrap();
        let mut router = Router::with_syntax(syntax);
        router.get("/items/{}", named("unnamed")).unwrap();

        assert_eq!(router.find(Method::Get, "/items/3").unwrap_err(), MatchError::NotFound);
    }

    #[tokio::test]
    async fn test_resolved_action_is_invocable() {
        let mut router = Router::new();
        router
            .get(
                "/fail",
                Action::new(|_req: ()| async move { Err::<&str, _>(BoxError::from("boom")) }),
            )
            .unwrap();
        router.get("/ok", named("ok")).unwrap();

        let found = router.find(Method::Get, "/ok").unwrap();
        assert_eq!(found.route.action().call(()).await.unwrap(), "ok");

        let found = router.find(Method::Get, "/fail").unwrap();
        assert_eq!(found.route.action().call(()).await.unwrap_err().to_string(), "boom");
    }
}
