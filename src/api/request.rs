//! Request descriptors handed to the mediator.

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;

/// Body of an outgoing request.
pub enum RequestBody {
    Empty,
    /// Serialized as `application/json`.
    Json(Value),
    /// Sent as `multipart/form-data` (image uploads).
    Multipart(Form),
}

/// One call to the backend: method, path relative to the base URL, body.
///
/// Built fresh for every call and consumed by [`ApiClient::send`](super::client::ApiClient::send).
pub struct ApiRequest {
    method: Method,
    path: String,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart form, overriding the default JSON encoding.
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub(crate) fn into_parts(self) -> (Method, String, RequestBody) {
        (self.method, self.path, self.body)
    }
}

/// Percent-encode an identifier for use as a single path segment.
pub fn segment(id: impl std::fmt::Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}
