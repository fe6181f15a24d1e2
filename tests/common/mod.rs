//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use route_registry::{Action, BoxError, Middleware};

/// An action that ignores its input and returns `name`.
#[allow(dead_code)]
pub fn named(name: &'static str) -> Action<(), &'static str> {
    Action::new(move |_req: ()| async move { Ok(name) })
}

/// Middleware that counts its invocations after `delay`.
#[allow(dead_code)]
pub fn counting<Req: Send + 'static>(counter: Arc<AtomicUsize>, delay: Duration) -> Middleware<Req> {
    Action::new(move |_req: Req| {
        let counter = counter.clone();
        async move {
            tokio::time::sleep(delay).await;
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    })
}

/// Middleware that fails with `message` after `delay`.
#[allow(dead_code)]
pub fn failing<Req: Send + 'static>(message: &'static str, delay: Duration) -> Middleware<Req> {
    Action::new(move |_req: Req| async move {
        tokio::time::sleep(delay).await;
        Err(BoxError::from(message))
    })
}
