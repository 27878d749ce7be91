//! Contact form: `GET /` shows the form, `POST /` accepts it.
//!
//! The page is one HTML file with two states:
//!
//! ```text
//! <header>{{if .Success}}<thanks>{{else}}<form>{{end}}<footer>
//! ```
//!
//! Both states are cut out of the file once, at startup. Nothing else in the
//! file is interpreted.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

const IF_SUCCESS: &str = "{{if .Success}}";
const ELSE: &str = "{{else}}";
const END: &str = "{{end}}";

/// The two rendered states of the contact page.
#[derive(Clone, Debug)]
pub struct ContactPage {
    form: String,
    success: String,
}

impl ContactPage {
    /// Reads and splits the page. Any failure here is fatal: call it before
    /// the server starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let fail = |reason: String| Error::Template { path: path.to_path_buf(), reason };

        let source = std::fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
        let page = Self::parse(&source).map_err(|reason| fail(reason.to_owned()))?;

        info!(path = %path.display(), "contact page loaded");
        Ok(page)
    }

    pub(crate) fn parse(source: &str) -> Result<Self, &'static str> {
        let (head, rest) = source.split_once(IF_SUCCESS).ok_or("missing {{if .Success}}")?;
        let (thanks, rest) = rest.split_once(ELSE).ok_or("missing {{else}} after {{if .Success}}")?;
        let (form, tail) = rest.split_once(END).ok_or("missing {{end}} after {{else}}")?;

        Ok(Self {
            form: [head, form, tail].concat(),
            success: [head, thanks, tail].concat(),
        })
    }

    pub fn form(&self) -> &str { &self.form }
    pub fn success(&self) -> &str { &self.success }
}

/// What a visitor submitted. Absent fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDetails {
    pub fn from_request(req: &Request) -> Self {
        Self {
            email: req.form_value("email"),
            subject: req.form_value("subject"),
            message: req.form_value("message"),
        }
    }
}

/// Renders the form for every method except `POST`, which renders the
/// success state. Never fails.
pub fn respond(page: &ContactPage, req: &Request) -> Response {
    if req.method() != http::Method::POST {
        return Response::html(page.form());
    }

    let details = ContactDetails::from_request(req);
    debug!(
        email = %details.email,
        subject = %details.subject,
        message_len = details.message.len(),
        "contact form submitted"
    );
    Response::html(page.success())
}

/// `/` for all methods.
pub fn router(page: ContactPage) -> Router {
    let page = Arc::new(page);
    Router::new().any("/", move |req: Request| {
        let page = Arc::clone(&page);
        async move { respond(&page, &req) }
    })
}
