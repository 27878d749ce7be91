//! `/foo` and `/bar`, each behind the access-logging middleware.

use crate::middleware::logging;
use crate::request::Request;
use crate::router::Router;

pub async fn foo(_req: Request) -> &'static str {
    "foo\n"
}

pub async fn bar(_req: Request) -> &'static str {
    "bar\n"
}

pub fn router() -> Router {
    Router::new()
        .any("/foo", logging(foo))
        .any("/bar", logging(bar))
}
