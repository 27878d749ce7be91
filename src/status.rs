//! HTTP status codes as a typed enum.
//!
//! Only the codes trellis and its applications actually send. Anything more
//! exotic goes through [`http::StatusCode`] via [`Response::builder`].
//!
//! ```rust
//! use trellis::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! async fn gone(_req: trellis::Request) -> Status {
//!     Status::NoContent
//! }
//! ```
//!
//! [`Response::builder`]: crate::Response::builder

use http::StatusCode;

/// A status code a handler commonly returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200
    Created,             // 201
    NoContent,           // 204

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405
}

impl From<Status> for StatusCode {
    fn from(s: Status) -> StatusCode {
        match s {
            Status::Ok                  => StatusCode::OK,
            Status::Created             => StatusCode::CREATED,
            Status::NoContent           => StatusCode::NO_CONTENT,
            Status::BadRequest          => StatusCode::BAD_REQUEST,
            Status::NotFound            => StatusCode::NOT_FOUND,
            Status::MethodNotAllowed    => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        StatusCode::from(s).as_u16()
    }
}
