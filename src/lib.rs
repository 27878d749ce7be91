//! # trellis
//!
//! Small HTTP building blocks on hyper: a radix-tree [`Router`], handlers
//! that are plain `async fn`s, and [`middleware`] that wraps a handler in
//! another handler with the same contract.
//!
//! - Routing via [`matchit`]: literal paths, `{name}` templates, sub-router
//!   nesting
//! - Middleware as handler-to-handler functions, composed once at startup
//! - Graceful shutdown: SIGTERM / Ctrl-C, drains in-flight requests
//!
//! The route table is an ordinary value: build it, hand it to
//! [`Server::serve`], and it is read-only from then on.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use trellis::middleware::logging;
//! use trellis::{Request, Router, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), trellis::Error> {
//!     let app = Router::new()
//!         .any("/foo", logging(foo))
//!         .get("/books/{title}/page/{page}", page);
//!
//!     Server::bind(([0, 0, 0, 0], 80).into()).serve(app).await
//! }
//!
//! async fn foo(_req: Request) -> &'static str {
//!     "foo\n"
//! }
//!
//! async fn page(req: Request) -> String {
//!     let title = req.param("title").unwrap_or_default();
//!     format!("{title}\n")
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod apps;
pub mod config;
pub mod middleware;

pub use config::Config;
pub use error::Error;
pub use handler::{BoxFuture, BoxedHandler, Erased, ErasedHandler, Handler};
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, shutdown_signal};
pub use status::Status;
