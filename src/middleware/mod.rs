//! Middleware layer.
//!
//! A middleware takes a handler and returns a handler with the same
//! contract. It is the place for cross-cutting concerns such as access
//! logging. Wrapping happens once, at registration time:
//!
//! ```rust,no_run
//! use trellis::{Request, Router};
//! use trellis::middleware::{Chain, Logging, inspect, logging};
//!
//! async fn foo(_req: Request) -> &'static str { "foo\n" }
//!
//! let app = Router::new()
//!     .any("/foo", logging(foo))
//!     .any("/bar", Chain::new()
//!         .with(Logging)
//!         .with(inspect(|req: &Request| assert!(!req.path().is_empty())))
//!         .then(foo));
//! ```
//!
//! Middleware in this module never short-circuits and never touches the
//! request: the wrapped handler runs exactly once and its response is
//! returned unchanged.

mod logging;

use std::sync::Arc;

use crate::handler::{BoxFuture, BoxedHandler, Erased, ErasedHandler, Handler};
use crate::request::Request;

pub use logging::{ACCESS_TARGET, Logging, logging};

/// Turns one handler into another with the same signature.
///
/// Any `Fn(BoxedHandler) -> BoxedHandler` closure is a middleware.
pub trait Middleware: Send + Sync + 'static {
    fn wrap(&self, next: BoxedHandler) -> BoxedHandler;
}

impl<F> Middleware for F
where
    F: Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static,
{
    fn wrap(&self, next: BoxedHandler) -> BoxedHandler {
        self(next)
    }
}

// ── Chain ─────────────────────────────────────────────────────────────────────

/// An ordered stack of middleware. The first layer added is the outermost,
/// so its side effect runs first.
#[derive(Clone, Default)]
pub struct Chain {
    layers: Vec<Arc<dyn Middleware>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `middleware` inside every layer added so far.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        self.layers.push(Arc::new(middleware));
        self
    }

    /// Wraps `handler` in every layer. The chain itself can be reused for
    /// other handlers.
    pub fn then(&self, handler: impl Handler) -> Erased {
        let wrapped = self
            .layers
            .iter()
            .rev()
            .fold(handler.into_boxed_handler(), |next, layer| layer.wrap(next));
        Erased(wrapped)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Middleware that calls `f` with the request, then delegates.
pub fn inspect<F>(f: F) -> Inspect<F>
where
    F: Fn(&Request) + Send + Sync + 'static,
{
    Inspect(Arc::new(f))
}

/// See [`inspect`].
pub struct Inspect<F>(Arc<F>);

impl<F> Middleware for Inspect<F>
where
    F: Fn(&Request) + Send + Sync + 'static,
{
    fn wrap(&self, next: BoxedHandler) -> BoxedHandler {
        Arc::new(Inspected { observe: Arc::clone(&self.0), next })
    }
}

struct Inspected<F> {
    observe: Arc<F>,
    next: BoxedHandler,
}

impl<F> ErasedHandler for Inspected<F>
where
    F: Fn(&Request) + Send + Sync,
{
    fn call(&self, req: Request) -> BoxFuture {
        (self.observe)(&req);
        self.next.call(req)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::request::tests::request;

    type Trail = Arc<Mutex<Vec<String>>>;

    fn mark(trail: &Trail, label: &'static str) -> Inspect<impl Fn(&Request) + Send + Sync + use<>> {
        let trail = Arc::clone(trail);
        inspect(move |req: &Request| trail.lock().unwrap().push(format!("{label} {}", req.path())))
    }

    fn recording_handler(trail: &Trail) -> impl Handler + use<> {
        let trail = Arc::clone(trail);
        move |_req: Request| {
            let trail = Arc::clone(&trail);
            async move {
                trail.lock().unwrap().push("handler".to_owned());
                "body"
            }
        }
    }

    #[tokio::test]
    async fn first_layer_runs_first_and_handler_last() {
        let trail = Trail::default();
        let h = Chain::new()
            .with(mark(&trail, "outer"))
            .with(mark(&trail, "inner"))
            .then(recording_handler(&trail))
            .into_boxed_handler();

        let res = h.call(request("GET", "/foo", None, "")).await;

        assert_eq!(res.body(), b"body");
        assert_eq!(*trail.lock().unwrap(), ["outer /foo", "inner /foo", "handler"]);
    }

    #[tokio::test]
    async fn each_call_runs_each_layer_once() {
        let trail = Trail::default();
        let h = Chain::new().with(mark(&trail, "seen")).then(recording_handler(&trail)).into_boxed_handler();

        h.call(request("GET", "/a", None, "")).await;
        h.call(request("GET", "/b", None, "")).await;

        assert_eq!(*trail.lock().unwrap(), ["seen /a", "handler", "seen /b", "handler"]);
    }

    #[tokio::test]
    async fn closures_are_middleware() {
        let trail = Trail::default();
        let t = Arc::clone(&trail);
        let count = move |next: BoxedHandler| -> BoxedHandler {
            t.lock().unwrap().push("wrapped".to_owned());
            next
        };
        let chain = Chain::new().with(count);
        assert_eq!(chain.len(), 1);

        let h = chain.then(|_req: Request| async { "ok" }).into_boxed_handler();
        let res = h.call(request("POST", "/", None, "")).await;

        assert_eq!(res.body(), b"ok");
        assert_eq!(*trail.lock().unwrap(), ["wrapped"]);
    }

    #[tokio::test]
    async fn empty_chain_is_identity() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        let h = chain.then(|req: Request| async move { req.path().to_owned() }).into_boxed_handler();
        assert_eq!(h.call(request("GET", "/x", None, "")).await.body(), b"/x");
    }
}
