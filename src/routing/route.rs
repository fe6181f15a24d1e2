//! Registered routes and lookup results.

use std::fmt;

use crate::routing::{Action, Method, Params};

/// A method, a normalized path template and the action it resolves to.
pub struct Route<Req, Res> {
    method: Method,
    path: String,
    action: Action<Req, Res>,
}

impl<Req, Res> Route<Req, Res> {
    pub(crate) fn new(method: Method, path: String, action: Action<Req, Res>) -> Self {
        Self { method, path, action }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The normalized template, e.g. `/users/{id}`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn action(&self) -> &Action<Req, Res> {
        &self.action
    }
}

impl<Req, Res> Clone for Route<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            path: self.path.clone(),
            action: self.action.clone(),
        }
    }
}

impl<Req, Res> fmt::Debug for Route<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A successful lookup.
pub struct Match<'r, Req, Res> {
    /// The route that matched.
    pub route: &'r Route<Req, Res>,
    /// Parameters bound by the route's placeholders. Empty for exact matches.
    pub params: Params,
}

impl<Req, Res> fmt::Debug for Match<'_, Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("route", self.route)
            .field("params", &self.params)
            .finish()
    }
}
