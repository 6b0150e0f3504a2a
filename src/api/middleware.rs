//! Request/response stages run by the mediator around every call.
//!
//! `BeforeSend` stages see the fully built request just before it is
//! transmitted; `AfterReceive` stages see the outcome before it is returned
//! to the caller. Stages observe and augment, they never replace an outcome.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;

use super::client::ApiResponse;
use super::error::ApiError;
use crate::navigation::{Navigator, ENTRY_ROUTE};
use crate::session::SessionStore;

/// Outbound stage. Must not fail the request.
pub trait BeforeSend: Send + Sync {
    fn before_send(&self, request: &mut Request);
}

/// Inbound stage. Runs for successes and failures alike.
pub trait AfterReceive: Send + Sync {
    fn after_receive(&self, outcome: &Result<ApiResponse, ApiError>);
}

/// Attaches `Authorization: Bearer <token>` when a credential is stored.
pub struct BearerAuth {
    session: Arc<dyn SessionStore>,
}

impl BearerAuth {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl BeforeSend for BearerAuth {
    fn before_send(&self, request: &mut Request) {
        let token = match self.session.get() {
            Ok(Some(token)) => token,
            Ok(None) => return,
            Err(e) => {
                log::warn!("Could not read session token, sending unauthenticated: {}", e);
                return;
            }
        };

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => log::warn!("Stored session token is not a valid header value, ignoring"),
        }
    }
}

/// Ends the session when the backend rejects the credential.
///
/// Clears the stored token and sends the front end to the entry route.
/// Safe to trigger repeatedly and with no token stored.
pub struct UnauthorizedRecovery {
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl UnauthorizedRecovery {
    pub fn new(session: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

impl AfterReceive for UnauthorizedRecovery {
    fn after_receive(&self, outcome: &Result<ApiResponse, ApiError>) {
        let Err(err) = outcome else {
            return;
        };
        if !err.is_unauthorized() {
            return;
        }

        log::error!("Unauthorized access. Please log in again.");
        if let Err(e) = self.session.clear() {
            log::warn!("Failed to clear session token: {}", e);
        }
        self.navigator.navigate(ENTRY_ROUTE);
    }
}
