//! Navigation target for session recovery.
//!
//! The mediator redirects the front end to the unauthenticated entry route
//! when the backend rejects the credential.

use std::sync::RwLock;

/// Unauthenticated entry route (the login screen).
pub const ENTRY_ROUTE: &str = "/";

/// Something that can move the user to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

#[derive(Debug, Default)]
struct LocationInner {
    current: Option<String>,
    redirects: u32,
}

/// Records where the front end was sent and how many times.
///
/// The CLI inspects it after a command to tell the user their session
/// ended; tests use it to assert on redirects.
#[derive(Debug, Default)]
pub struct Location {
    inner: RwLock<LocationInner>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last route navigated to, if any.
    pub fn current(&self) -> Option<String> {
        match self.inner.read() {
            Ok(inner) => inner.current.clone(),
            Err(poisoned) => poisoned.into_inner().current.clone(),
        }
    }

    /// Number of navigations performed so far.
    pub fn redirects(&self) -> u32 {
        match self.inner.read() {
            Ok(inner) => inner.redirects,
            Err(poisoned) => poisoned.into_inner().redirects,
        }
    }

    /// Whether the front end has been sent back to the entry route.
    pub fn at_entry(&self) -> bool {
        self.current().as_deref() == Some(ENTRY_ROUTE)
    }
}

impl Navigator for Location {
    fn navigate(&self, route: &str) {
        let mut inner = match self.inner.write() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.current = Some(route.to_string());
        inner.redirects += 1;
        log::info!("Navigated to {}", route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_location_has_no_route() {
        let location = Location::new();
        assert_eq!(location.current(), None);
        assert_eq!(location.redirects(), 0);
        assert!(!location.at_entry());
    }

    #[test]
    fn test_navigate_records_route_and_count() {
        let location = Location::new();
        location.navigate("/places");
        location.navigate(ENTRY_ROUTE);

        assert_eq!(location.current().as_deref(), Some("/"));
        assert_eq!(location.redirects(), 2);
        assert!(location.at_entry());
    }
}
