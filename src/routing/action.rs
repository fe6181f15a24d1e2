//! Route actions and the endpoints handed to registration.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};

use crate::routing::middleware::compose;

/// Error type produced by actions and middleware.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Future returned by invoking an [`Action`].
pub type ActionFuture<Res> = BoxFuture<'static, Result<Res, BoxError>>;

/// A shareable async procedure taking the request arguments.
///
/// The router stores actions and hands them back from lookups; it never
/// invokes them itself.
pub struct Action<Req, Res> {
    inner: Arc<dyn Fn(Req) -> ActionFuture<Res> + Send + Sync>,
}

/// Middleware runs before an action; its output is discarded.
pub type Middleware<Req> = Action<Req, ()>;

impl<Req, Res> Action<Req, Res> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Res, BoxError>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move |req| f(req).boxed()),
        }
    }

    pub fn call(&self, req: Req) -> ActionFuture<Res> {
        (self.inner)(req)
    }
}

impl<Req, Res> Clone for Action<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Req, Res> fmt::Debug for Action<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}

/// What a registration call receives: a bare action, or middleware plus the
/// action they guard.
pub enum Endpoint<Req, Res> {
    Action(Action<Req, Res>),
    Chain(Vec<Middleware<Req>>, Action<Req, Res>),
}

impl<Req, Res> Endpoint<Req, Res>
where
    Req: Clone + Send + 'static,
    Res: Send + 'static,
{
    /// The action to store on the route.
    pub fn into_action(self) -> Action<Req, Res> {
        match self {
            Endpoint::Action(action) => action,
            Endpoint::Chain(middleware, action) => compose(middleware, action),
        }
    }
}

impl<Req, Res> From<Action<Req, Res>> for Endpoint<Req, Res> {
    fn from(action: Action<Req, Res>) -> Self {
        Endpoint::Action(action)
    }
}

impl<Req, Res> From<(Vec<Middleware<Req>>, Action<Req, Res>)> for Endpoint<Req, Res> {
    fn from((middleware, action): (Vec<Middleware<Req>>, Action<Req, Res>)) -> Self {
        Endpoint::Chain(middleware, action)
    }
}
