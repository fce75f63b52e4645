//! Admin Session
//!
//! Explicit session value with a defined lifecycle: created on login,
//! restored once at startup, attached as a Bearer header by the request
//! layer, cleared on logout or on an authorization-denied response.

use serde::{Deserialize, Serialize};

use crate::models::Admin;

const STORAGE_KEY: &str = "adminSession";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub admin: Admin,
}

impl Session {
    pub fn new(token: String, admin: Admin) -> Self {
        Self { token, admin }
    }
}

/// Restore the persisted session, if any. Called once at startup.
pub fn restore() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Persist the session after a successful login
pub fn persist(session: &Session) {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

/// Drop the persisted session (logout or 401)
pub fn clear() {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session::new(
            "tok-123".into(),
            Admin { id: "a1".into(), name: "Dana".into(), email: "d@allin.example".into(), role: "admin".into() },
        );
        let raw = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, session);
    }
}
