//! Account endpoints: login and logout.
//!
//! These are the only calls that move the session between its two states
//! explicitly. The 401 path in the mediator is the third transition.

use serde::Deserialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::ApiRequest;
use super::types::{LoginRequest, LoginResponse};

pub const LOGIN_PATH: &str = "/auth/login/";
pub const LOGOUT_PATH: &str = "/auth/logout/";

/// Log in with email and password.
///
/// POST /auth/login/ `{email, password}`. The payload of a successful
/// response is always returned as-is; when it carries a string `token`,
/// that token becomes the session credential.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Value, ApiError> {
    let request = ApiRequest::post(LOGIN_PATH).json(&LoginRequest { email, password })?;
    let data = client.send_data(request).await?;

    match LoginResponse::deserialize(&data) {
        Ok(login) => {
            client.session().set(&login.token)?;
            log::info!("Logged in as {}", email);
        }
        Err(_) => log::warn!("Login response has no token, session not started"),
    }
    Ok(data)
}

/// Log out.
///
/// POST /auth/logout/ with the current credential, then clears the stored
/// credential whether or not the backend call succeeded. The call's outcome
/// is returned unchanged.
pub async fn logout(client: &ApiClient) -> Result<Value, ApiError> {
    let result = client.send_data(ApiRequest::post(LOGOUT_PATH)).await;
    if let Err(ref e) = result {
        log::warn!("Logout request failed (session cleared locally): {}", e);
    }

    if let Err(e) = client.session().clear() {
        log::warn!("Failed to clear session token: {}", e);
    }
    log::info!("Logout complete");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::navigation::Location;
    use crate::session::{MemorySessionStore, SessionState, SessionStore};
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Arc;

    fn client_for(url: &str, session: Arc<MemorySessionStore>) -> ApiClient {
        ApiClient::new(&ApiConfig::new(url), session, Arc::new(Location::new()))
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", LOGIN_PATH)
            .match_body(Matcher::Json(json!({"email": "a@b.com", "password": "pw"})))
            .with_status(200)
            .with_body(r#"{"token":"T","user":{"id":1}}"#)
            .create_async()
            .await;

        let session = Arc::new(MemorySessionStore::new());
        let client = client_for(&server.url(), session.clone());

        let data = login(&client, "a@b.com", "pw").await.unwrap();

        assert_eq!(data, json!({"token": "T", "user": {"id": 1}}));
        assert_eq!(session.get().unwrap().as_deref(), Some("T"));
        assert_eq!(session.state(), SessionState::Authenticated);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_without_token_returns_payload() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", LOGIN_PATH)
            .with_status(200)
            .with_body(r#"{"access":"A","refresh":"R","user":{"id":1}}"#)
            .create_async()
            .await;

        let session = Arc::new(MemorySessionStore::new());
        let client = client_for(&server.url(), session.clone());

        let data = login(&client, "a@b.com", "pw").await.unwrap();

        assert_eq!(data, json!({"access": "A", "refresh": "R", "user": {"id": 1}}));
        assert_eq!(session.get().unwrap(), None);
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_with_non_string_token_returns_payload() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", LOGIN_PATH)
            .with_status(200)
            .with_body(r#"{"token":null}"#)
            .create_async()
            .await;

        let session = Arc::new(MemorySessionStore::new());
        let client = client_for(&server.url(), session.clone());

        let data = login(&client, "a@b.com", "pw").await.unwrap();

        assert_eq!(data, json!({"token": null}));
        assert_eq!(session.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_rejected_propagates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", LOGIN_PATH)
            .with_status(400)
            .with_body(r#"{"non_field_errors":["Invalid credentials"]}"#)
            .create_async()
            .await;

        let session = Arc::new(MemorySessionStore::new());
        let client = client_for(&server.url(), session.clone());

        let err = login(&client, "a@b.com", "wrong").await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(session.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_sends_token_then_clears() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", LOGOUT_PATH)
            .match_header("authorization", "Bearer T")
            .with_status(200)
            .with_body(r#"{"detail":"Logged out"}"#)
            .create_async()
            .await;

        let session = Arc::new(MemorySessionStore::with_token("T"));
        let client = client_for(&server.url(), session.clone());

        let data = logout(&client).await.unwrap();

        assert_eq!(data, json!({"detail": "Logged out"}));
        assert_eq!(session.get().unwrap(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_logout_clears_even_on_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", LOGOUT_PATH)
            .with_status(500)
            .create_async()
            .await;

        let session = Arc::new(MemorySessionStore::with_token("T"));
        let client = client_for(&server.url(), session.clone());

        let err = logout(&client).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(session.get().unwrap(), None);
    }
}
