//! Radix-tree request router.
//!
//! One tree per HTTP method plus one for routes that accept every method.
//! O(path-length) lookup. You register a path, you get a handler.
//!
//! # Matching
//!
//! - `{name}` matches exactly one non-empty segment; `req.param("name")`
//!   returns it percent-decoded.
//! - A static segment beats a placeholder at the same position, so
//!   `/books/new` wins over `/books/{title}` for the path `/books/new`.
//!   This holds across trees too: the match with the fewest placeholders
//!   wins, whether it was registered for one method or for all of them.
//! - Between equally specific matches, a method-specific route beats an
//!   any-method route.
//! - `HEAD` falls back to the `GET` route.
//!
//! Registering the same pattern twice for the same method, or two patterns
//! the tree cannot tell apart (`/{a}` and `/{b}`), panics at startup.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application route table.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Every registration returns `self` so calls chain naturally.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
    by_method: HashMap<Method, MatchitRouter<BoxedHandler>>,
    any: MatchitRouter<BoxedHandler>,
}

struct Route {
    method: Option<Method>,
    path: String,
    handler: BoxedHandler,
}

/// Outcome of resolving a method + path pair.
pub(crate) enum Lookup {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a method + path pair.
    ///
    /// ```rust,no_run
    /// # use trellis::{Method, Request, Router};
    /// # async fn page(_: Request) -> &'static str { "" }
    /// Router::new().on(Method::Get, "/books/{title}/page/{page}", page);
    /// ```
    pub fn on(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.add(Some(method), path, handler.into_boxed_handler())
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    /// Register a handler for every method, including extension methods.
    /// Handlers that care about the method check `req.method()` themselves.
    pub fn any(self, path: &str, handler: impl Handler) -> Self {
        self.add(None, path, handler.into_boxed_handler())
    }

    /// Mount every route of `router` under `prefix`.
    ///
    /// ```rust,no_run
    /// # use trellis::{Request, Router};
    /// # async fn page(_: Request) -> &'static str { "" }
    /// let books = Router::new().get("/{title}/page/{page}", page);
    /// let app = Router::new().nest("/books", books);
    /// ```
    pub fn nest(self, prefix: &str, router: Router) -> Self {
        assert!(
            prefix.is_empty() || prefix.starts_with('/'),
            "invalid route prefix `{prefix}`: must start with `/`"
        );
        let prefix = prefix.trim_end_matches('/');
        router.routes.into_iter().fold(self, |this, route| {
            let path = format!("{prefix}{}", route.path);
            this.add(route.method, &path, route.handler)
        })
    }

    fn add(mut self, method: Option<Method>, path: &str, handler: BoxedHandler) -> Self {
        let tree = match method {
            Some(m) => self.by_method.entry(m).or_default(),
            None => &mut self.any,
        };
        tree.insert(path, Arc::clone(&handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));

        debug!(method = method.map_or("*", Method::as_str), path, "route registered");
        self.routes.push(Route { method, path: path.to_owned(), handler });
        self
    }

    pub(crate) fn lookup(&self, method: &http::Method, path: &str) -> Lookup {
        let known = method.as_str().parse::<Method>().ok();

        let mut candidates = Vec::with_capacity(3);
        if let Some(m) = known {
            candidates.extend(self.by_method.get(&m));
            if m == Method::Head {
                candidates.extend(self.by_method.get(&Method::Get));
            }
        }
        candidates.push(&self.any);

        // Fewest placeholders wins across trees; on a tie the earlier tree
        // (method-specific before any-method) wins.
        let best = candidates
            .into_iter()
            .filter_map(|tree| tree.at(path).ok())
            .min_by_key(|matched| matched.params.len());

        if let Some(matched) = best {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), percent_decode_str(v).decode_utf8_lossy().into_owned()))
                .collect();
            return Lookup::Found(handler, params);
        }

        let allowed = self.allowed_methods(path);
        if allowed.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::MethodNotAllowed(allowed)
        }
    }

    fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let serves = |m: Method| self.by_method.get(&m).is_some_and(|t| t.at(path).is_ok());
        Method::ALL
            .into_iter()
            .filter(|&m| serves(m) || (m == Method::Head && serves(Method::Get)))
            .collect()
    }

    /// Route `req` and run the matching handler.
    ///
    /// Unmatched paths get `404`; paths that only match other methods get
    /// `405` with an `allow` header.
    pub async fn handle(&self, mut req: Request) -> Response {
        match self.lookup(&req.method, &req.path) {
            Lookup::Found(handler, params) => {
                req.params = params;
                handler.call(req).await
            }
            Lookup::MethodNotAllowed(allowed) => {
                let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
                Response::builder()
                    .status(Status::MethodNotAllowed)
                    .header("allow", &allow)
                    .no_body()
            }
            Lookup::NotFound => Response::status(Status::NotFound),
        }
    }
}
