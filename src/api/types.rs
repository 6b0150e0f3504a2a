//! Request and response types for the account endpoints.
//!
//! Resource payloads (places, categories, tags, images, social media) are
//! passed through as `serde_json::Value`; their shape belongs to the backend.

use serde::{Deserialize, Serialize};

/// Login request body sent to POST /auth/login/.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The part of the login response this client relies on.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
