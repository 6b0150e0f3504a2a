//! Authenticated client for the places admin backend.
//!
//! Every call goes through [`api::ApiClient`], which attaches the stored
//! bearer token and ends the session when the backend answers 401.

pub mod api;
pub mod config;
pub mod navigation;
pub mod session;

pub use api::{ApiClient, ApiError, ApiRequest, ApiResponse};
pub use config::{ApiConfig, Namespaces};
pub use navigation::{Location, Navigator, ENTRY_ROUTE};
pub use session::{KeyringSessionStore, MemorySessionStore, SessionState, SessionStore};
