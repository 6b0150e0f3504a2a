//! HTTP client that mediates every call to the backend.
//!
//! Each request passes through the registered `BeforeSend` stages right
//! before transmission and its outcome through the `AfterReceive` stages
//! before it reaches the caller. The default stages attach the bearer token
//! and end the session on a 401.

use std::sync::Arc;

use reqwest::{Client, Request, StatusCode};
use serde_json::Value;

use super::error::ApiError;
use super::middleware::{AfterReceive, BearerAuth, BeforeSend, UnauthorizedRecovery};
use super::request::{ApiRequest, RequestBody};
use crate::config::{ApiConfig, Namespaces};
use crate::navigation::Navigator;
use crate::session::SessionStore;

/// Successful response: status and payload.
///
/// `data` is the parsed JSON body, a JSON string for non-JSON text, or
/// `null` when the body is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub data: Value,
}

/// Mediated HTTP client for the places admin API.
///
/// Cheap to share behind an `Arc`; concurrent calls each run the stages
/// independently against the shared session store.
pub struct ApiClient {
    client: Client,
    base_url: String,
    namespaces: Namespaces,
    session: Arc<dyn SessionStore>,
    before_send: Vec<Box<dyn BeforeSend>>,
    after_receive: Vec<Box<dyn AfterReceive>>,
}

impl ApiClient {
    /// Client with bearer-token injection and 401 recovery registered.
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::without_stages(config, session.clone())
            .with_before_send(BearerAuth::new(session.clone()))
            .with_after_receive(UnauthorizedRecovery::new(session, navigator))
    }

    /// Client with no stages registered.
    pub fn without_stages(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("places-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            namespaces: config.namespaces.clone(),
            session,
            before_send: Vec::new(),
            after_receive: Vec::new(),
        }
    }

    /// Use a preconfigured transport (timeouts, proxies, TLS roots).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Append an outbound stage. Stages run in registration order.
    pub fn with_before_send(mut self, stage: impl BeforeSend + 'static) -> Self {
        self.before_send.push(Box::new(stage));
        self
    }

    /// Append an inbound stage. Stages run in registration order.
    pub fn with_after_receive(mut self, stage: impl AfterReceive + 'static) -> Self {
        self.after_receive.push(Box::new(stage));
        self
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request through the stages.
    ///
    /// The outcome returned is exactly what the inbound stages observed;
    /// failures are never swallowed.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let (method, path, body) = request.into_parts();
        log::debug!("{} {}", method, path);

        let builder = self.client.request(method, self.url(&path));
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let outcome = match builder.build() {
            Ok(mut req) => {
                for stage in &self.before_send {
                    stage.before_send(&mut req);
                }
                self.execute(req).await
            }
            Err(e) => Err(ApiError::Transport(e)),
        };

        for stage in &self.after_receive {
            stage.after_receive(&outcome);
        }

        match &outcome {
            Ok(resp) => log::debug!("{} -> {}", path, resp.status),
            Err(e) => log::debug!("{} -> {}", path, e),
        }
        outcome
    }

    /// Send and return only the payload.
    pub async fn send_data(&self, request: ApiRequest) -> Result<Value, ApiError> {
        Ok(self.send(request).await?.data)
    }

    async fn execute(&self, req: Request) -> Result<ApiResponse, ApiError> {
        let resp = self.client.execute(req).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let data = parse_body(&bytes);

        if status.is_success() {
            Ok(ApiResponse { status, data })
        } else {
            Err(ApiError::from_status(status, data))
        }
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
