//! Middleware composition.
//!
//! # Semantics
//! ```text
//! composed(req)
//!     → every middleware(req.clone()) polled concurrently
//!     → first failure aborts the join and becomes the result
//!     → action(req) only after every middleware succeeded
//! ```
//!
//! # Design Decisions
//! - Middleware outputs are discarded
//! - No timeout or cancellation; callers wrap individual actions if needed

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::routing::action::{Action, Middleware};

/// Guard `action` with `middleware`.
pub fn compose<Req, Res>(middleware: Vec<Middleware<Req>>, action: Action<Req, Res>) -> Action<Req, Res>
where
    Req: Clone + Send + 'static,
    Res: Send + 'static,
{
    let middleware: Arc<[Middleware<Req>]> = middleware.into();

    Action::new(move |req: Req| {
        let pending: Vec<_> = middleware.iter().map(|m| m.call(req.clone())).collect();
        let action = action.clone();

        async move {
            match try_join_all(pending).await {
                Ok(_) => action.call(req).await,
                Err(err) => {
                    tracing::debug!(error = %err, "Middleware rejected request");
                    Err(err)
                }
            }
        }
    })
}
