//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::i18n::Lang;
use crate::models::Admin;
use crate::session::Session;

/// Transient toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active UI language
    pub language: Lang,
    /// Admin session, present only while logged in
    pub session: Option<Session>,
    /// Home-page section to scroll to after cross-page navigation,
    /// consumed at most once
    pub pending_scroll: Option<String>,
    /// Active toast messages
    pub toasts: Vec<Toast>,
    /// Monotone toast id counter
    pub toast_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_language(store: &AppStore, lang: Lang) {
    store.language().set(lang);
}

pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    store.session().set(session);
}

/// Current bearer token, if logged in
pub fn store_token(store: &AppStore) -> Option<String> {
    store.session().with(|s| s.as_ref().map(|s| s.token.clone()))
}

/// Admin display name, if logged in
pub fn store_admin_name(store: &AppStore) -> Option<String> {
    store.session().with(|s| s.as_ref().map(|s| s.admin.name.clone()))
}

/// Replace the admin profile on the live session; no-op when nothing
/// changed, so profile refreshes do not wake session subscribers
pub fn store_update_admin(store: &AppStore, admin: Admin) {
    let session = store.session();
    let changed = session.with_untracked(|s| s.as_ref().is_some_and(|s| s.admin != admin));
    if changed {
        session.update(|s| {
            if let Some(s) = s {
                s.admin = admin;
            }
        });
    }
}

pub fn store_set_pending_scroll(store: &AppStore, section: &str) {
    store.pending_scroll().set(Some(section.to_string()));
}

/// Consume the pending scroll intent, clearing it
pub fn store_take_pending_scroll(store: &AppStore) -> Option<String> {
    let pending = store.pending_scroll().get_untracked();
    if pending.is_some() {
        store.pending_scroll().set(None);
    }
    pending
}

/// Queue a toast; returns its id for later removal
pub fn store_push_toast(store: &AppStore, message: &str) -> u32 {
    let id = store.toast_seq().get_untracked() + 1;
    store.toast_seq().set(id);
    store.toasts().write().push(Toast { id, message: message.to_string() });
    id
}

pub fn store_remove_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|t| t.id != toast_id);
}
