//! Access logging.

use tracing::info;

use super::{Middleware, inspect};
use crate::handler::{BoxedHandler, Erased, Handler};
use crate::request::Request;

/// `tracing` target of every access entry.
pub const ACCESS_TARGET: &str = "trellis::access";

/// Logs the request path, then calls the wrapped handler.
///
/// The entry goes to whatever `tracing` subscriber is installed; with none,
/// it is dropped and the request proceeds as usual.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logging;

impl Middleware for Logging {
    fn wrap(&self, next: BoxedHandler) -> BoxedHandler {
        inspect(log_access).wrap(next)
    }
}

/// Function form of [`Logging`]: `router.any("/foo", logging(foo))`.
pub fn logging(handler: impl Handler) -> Erased {
    Erased(Logging.wrap(handler.into_boxed_handler()))
}

fn log_access(req: &Request) {
    info!(target: ACCESS_TARGET, method = %req.method(), "{}", req.path());
}
