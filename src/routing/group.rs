//! Prefix groups.
//!
//! A group concatenates its prefix to every path before delegating to the
//! router it borrows. Groups nest by concatenating prefixes.

use crate::routing::router::method_shorthands;
use crate::routing::{Endpoint, Method, RouteError, Router};

/// Registers routes on a router under a fixed path prefix.
pub struct Group<'r, Req, Res> {
    router: &'r mut Router<Req, Res>,
    prefix: String,
}

impl<'r, Req, Res> Group<'r, Req, Res> {
    pub(crate) fn new(router: &'r mut Router<Req, Res>, prefix: String) -> Self {
        Self { router, prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<'r, Req, Res> Group<'r, Req, Res>
where
    Req: Clone + Send + 'static,
    Res: Send + 'static,
{
    /// Register `endpoint` under `method` and the prefixed `path`.
    pub fn register(
        &mut self,
        method: Method,
        path: &str,
        endpoint: impl Into<Endpoint<Req, Res>>,
    ) -> Result<&mut Self, RouteError> {
        let full = format!("{}{}", self.prefix, path);
        self.router.register(method, &full, endpoint)?;
        Ok(self)
    }

    method_shorthands! {
        connect => Connect,
        delete => Delete,
        get => Get,
        head => Head,
        options => Options,
        patch => Patch,
        post => Post,
        put => Put,
        trace => Trace,
    }

    /// A nested group whose prefix extends this one.
    pub fn group(&mut self, path: &str) -> Group<'_, Req, Res> {
        Group::new(&mut *self.router, format!("{}{}", self.prefix, path))
    }
}

#[cfg(test)]
mod tests {
    use crate::routing::{Action, Method, Router};

    fn named(name: &'static str) -> Action<(), &'static str> {
        Action::new(move |_req: ()| async move { Ok(name) })
    }

    #[test]
    fn test_group_prefixes_paths() {
        let mut router = Router::new();
        router.group("/api").get("/users", named("users")).unwrap();

        let route = router.routes().next().unwrap();
        assert_eq!(route.method(), Method::Get);
        assert_eq!(route.path(), "/api/users");
    }

    #[test]
    fn test_group_chains_and_nests() {
        let mut router = Router::new();
        {
            let mut api = router.group("/api");
            api.get("/users", named("list"))
                .unwrap()
                .post("/users", named("create"))
                .unwrap();
            api.group("/v2").get("/users/{id}", named("show")).unwrap();
        }

        let routes: Vec<_> = router
            .routes()
            .map(|r| format!("{} {}", r.method(), r.path()))
            .collect();
        assert_eq!(routes, ["GET /api/users", "POST /api/users", "GET /api/v2/users/{id}"]);
    }

    #[test]
    fn test_group_root_path_normalizes_to_prefix() {
        let mut router = Router::new();
        router.group("/api").get("/", named("index")).unwrap();
        assert_eq!(router.routes().next().unwrap().path(), "/api");
    }

    #[test]
    fn test_group_reports_duplicates() {
        let mut router = Router::new();
        router.get("/api/users", named("direct")).unwrap();
        assert!(router.group("/api").get("/users/", named("grouped")).is_err());
        assert_eq!(router.len(), 1);
    }
}
