//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_TYPE;

/// An incoming HTTP request with its body fully read.
pub struct Request {
    pub(crate) method: http::Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(parts: http::request::Parts, body: Bytes) -> Self {
        Self {
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            method: parts.method,
            headers: parts.headers,
            body,
            params: HashMap::new(),
        }
    }

    pub fn method(&self) -> &http::Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> Option<&str> { self.query.as_deref() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Values that are not visible ASCII are skipped.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All path parameters resolved for this request.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Returns the first value of form field `key`, or `""` when it is absent.
    ///
    /// For `POST`, `PUT` and `PATCH` requests with an
    /// `application/x-www-form-urlencoded` body, the body is searched before
    /// the query string. Malformed percent-encoding decodes lossily; this
    /// never fails.
    ///
    /// `multipart/form-data` bodies are not decoded: their fields read as
    /// absent, and only the query string is consulted.
    pub fn form_value(&self, key: &str) -> String {
        self.body_form_value(key)
            .or_else(|| self.query.as_deref().and_then(|q| first_value(q.as_bytes(), key)))
            .unwrap_or_default()
    }

    fn body_form_value(&self, key: &str) -> Option<String> {
        let carries_form = self
            .method
            .as_str()
            .parse::<crate::Method>()
            .is_ok_and(crate::Method::carries_form_body);
        if !carries_form || !self.is_form_encoded() {
            return None;
        }
        first_value(&self.body, key)
    }

    fn is_form_encoded(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .is_some_and(|mime| {
                mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded")
            })
    }
}

fn first_value(input: &[u8], key: &str) -> Option<String> {
    form_urlencoded::parse(input)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a request the way the server does, for handler tests.
    pub(crate) fn request(method: &str, uri: &str, content_type: Option<&str>, body: &str) -> Request {
        let mut builder = http::Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        Request::new(parts, Bytes::from(body.to_owned()))
    }

    const FORM: Option<&str> = Some("application/x-www-form-urlencoded");

    #[test]
    fn form_value_reads_the_encoded_body() {
        let req = request("POST", "/", FORM, "email=a%40b.c&subject=hi+there");
        assert_eq!(req.form_value("email"), "a@b.c");
        assert_eq!(req.form_value("subject"), "hi there");
    }

    #[test]
    fn missing_fields_are_empty() {
        let req = request("POST", "/", FORM, "");
        assert_eq!(req.form_value("message"), "");
    }

    #[test]
    fn body_wins_over_query() {
        let req = request("POST", "/?email=query", FORM, "email=body");
        assert_eq!(req.form_value("email"), "body");

        let req = request("POST", "/?email=query", FORM, "other=1");
        assert_eq!(req.form_value("email"), "query");
    }

    #[test]
    fn body_is_ignored_without_form_content_type() {
        let req = request("POST", "/", Some("application/json"), "email=x");
        assert_eq!(req.form_value("email"), "");
    }

    #[test]
    fn get_reads_only_the_query() {
        let req = request("GET", "/?subject=s", FORM, "subject=body");
        assert_eq!(req.form_value("subject"), "s");
    }

    #[test]
    fn content_type_parameters_are_tolerated() {
        let req = request("POST", "/", Some("Application/X-WWW-Form-Urlencoded; charset=utf-8"), "message=ok");
        assert_eq!(req.form_value("message"), "ok");
    }

    #[test]
    fn malformed_encoding_never_fails() {
        let req = request("POST", "/", FORM, "message=%zz%&&=&email");
        assert_eq!(req.form_value("message"), "%zz%");
        assert_eq!(req.form_value("email"), "");
    }

    #[test]
    fn multipart_bodies_fall_back_to_the_query() {
        let body = "--b\r\ncontent-disposition: form-data; name=\"email\"\r\n\r\na@b.c\r\n--b--\r\n";
        let req = request("POST", "/?subject=s", Some("multipart/form-data; boundary=b"), body);
        assert_eq!(req.form_value("email"), "");
        assert_eq!(req.form_value("subject"), "s");
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let req = request("GET", "/?page=1&page=2", None, "");
        assert_eq!(req.form_value("page"), "1");
    }
}
