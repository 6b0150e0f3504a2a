//! Session credential storage.
//!
//! The bearer token lives behind the [`SessionStore`] trait so the request
//! mediator never touches a global. Two stores are provided: the OS
//! credential store via `keyring` (survives restarts) and an in-memory store.

use std::sync::RwLock;

use keyring::Entry;
use thiserror::Error;
use zeroize::Zeroize;

/// Keyring service name for the admin client.
pub const SERVICE_NAME: &str = "com.places.admin";

/// Keyring entry holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Credential store operation failed: {0}")]
    OperationFailed(String),
}

impl From<keyring::Error> for SessionError {
    fn from(err: keyring::Error) -> Self {
        SessionError::OperationFailed(err.to_string())
    }
}

/// Two-state session lifecycle derived from the stored credential.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    pub fn label(&self) -> &str {
        match self {
            SessionState::Unauthenticated => "Not logged in",
            SessionState::Authenticated => "Logged in",
        }
    }
}

/// Persisted key-value store for the single session credential.
///
/// Implementations must be safe to call from concurrent in-flight requests.
/// `clear` is idempotent: clearing an empty store succeeds.
pub trait SessionStore: Send + Sync {
    /// Current credential, `None` when logged out.
    fn get(&self) -> Result<Option<String>, SessionError>;

    /// Replace the stored credential.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored credential.
    fn clear(&self) -> Result<(), SessionError>;

    /// Session state as seen by the next request.
    fn state(&self) -> SessionState {
        match self.get() {
            Ok(Some(_)) => SessionState::Authenticated,
            _ => SessionState::Unauthenticated,
        }
    }
}

/// OS credential store (macOS Keychain, Secret Service, Windows Credential Manager).
pub struct KeyringSessionStore {
    service: String,
}

impl KeyringSessionStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    /// Use a custom service name, e.g. one per backend environment.
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry, SessionError> {
        Ok(Entry::new(&self.service, TOKEN_KEY)?)
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for KeyringSessionStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SessionError::from(e)),
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        self.entry()?.set_password(token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // already logged out
            Err(e) => Err(SessionError::from(e)),
        }
    }
}

/// In-memory store. The token is zeroed when replaced or cleared.
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a credential.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }

    fn replace(&self, next: Option<String>) -> Result<(), SessionError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionError::OperationFailed("session lock poisoned".into()))?;
        if let Some(ref mut old) = *guard {
            old.zeroize();
        }
        *guard = next;
        Ok(())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        let guard = self
            .token
            .read()
            .map_err(|_| SessionError::OperationFailed("session lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        self.replace(Some(token.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.replace(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get().unwrap(), None);
        assert_eq!(store.state(), SessionState::Unauthenticated);

        store.set("T").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("T"));
        assert_eq!(store.state(), SessionState::Authenticated);

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
        assert_eq!(store.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_memory_store_holds_single_credential() {
        let store = MemorySessionStore::with_token("first");
        store.set("second").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_store_clear_is_idempotent() {
        let store = MemorySessionStore::new();
        assert!(store.clear().is_ok());
        assert!(store.clear().is_ok());
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(SessionState::Unauthenticated.label(), "Not logged in");
        assert_eq!(SessionState::Authenticated.label(), "Logged in");
    }
}
