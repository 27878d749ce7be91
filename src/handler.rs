//! Handler trait and type erasure.
//!
//! # How async handlers are stored
//!
//! The router holds handlers of *different* types in one table, so every
//! handler is hidden behind a common trait object (`dyn ErasedHandler`).
//! Middleware works on the same erased form: it receives a
//! [`BoxedHandler`] and hands back another one.
//!
//! ```text
//! async fn foo(req: Request) -> Response { … }     ← user writes this
//!        ↓ router.get("/foo", foo)
//! foo.into_boxed_handler()                         ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(foo))                         ← stored as BoxedHandler
//!        ↓
//! handler.call(req)  at request time               ← one vtable dispatch
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Object-safe dispatch interface behind [`BoxedHandler`].
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any `async fn` or closure of the shape
///
/// ```text
/// Fn(Request) -> impl Future<Output = impl IntoResponse>
/// ```
///
/// and by an already erased [`BoxedHandler`], which is what lets middleware
/// output be registered like any other handler.
pub trait Handler: Send + Sync + 'static {
    fn into_boxed_handler(self) -> BoxedHandler;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Wraps a boxed handler so it can be passed back into [`Handler`]-taking
/// APIs without a second layer of boxing.
pub struct Erased(pub BoxedHandler);

impl Handler for Erased {
    fn into_boxed_handler(self) -> BoxedHandler {
        self.0
    }
}

/// Bridges a concrete handler `F` to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::tests::request;
    use crate::Status;

    async fn hello(_req: Request) -> &'static str {
        "hello"
    }

    #[tokio::test]
    async fn async_fns_become_handlers() {
        let res = hello.into_boxed_handler().call(request("GET", "/", None, "")).await;
        assert_eq!(res.body(), b"hello");
    }

    #[tokio::test]
    async fn closures_returning_status_become_handlers() {
        let h = (|_req: Request| async { Status::NoContent }).into_boxed_handler();
        let res = h.call(request("GET", "/", None, "")).await;
        assert_eq!(res.status_code(), http::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn erased_handlers_are_not_reboxed() {
        let inner = hello.into_boxed_handler();
        let outer = Erased(Arc::clone(&inner)).into_boxed_handler();
        assert!(Arc::ptr_eq(&inner, &outer));
    }
}
