//! Application Context
//!
//! Cross-page actions bundled over the global store and provided via
//! the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{self, Lang};
use crate::models::Admin;
use crate::session::{self, Session};
use crate::store::{
    store_admin_name, store_push_toast, store_remove_toast, store_set_language,
    store_set_pending_scroll, store_set_session, store_take_pending_scroll, store_token,
    store_update_admin, AppStateStoreFields, AppStore,
};

/// Toast lifetime in milliseconds
const TOAST_MS: u32 = 3000;

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn language(&self) -> Lang {
        self.store.language().get()
    }

    /// Switch the UI language: store, document attributes, persistence
    pub fn set_language(&self, lang: Lang) {
        store_set_language(&self.store, lang);
        i18n::apply_lang(lang);
    }

    /// Queue a toast that dismisses itself
    pub fn toast(&self, message: &str) {
        let id = store_push_toast(&self.store, message);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            store_remove_toast(&store, id);
        });
    }

    pub fn remove_toast(&self, id: u32) {
        store_remove_toast(&self.store, id);
    }

    /// Record a home-page section to scroll to after navigating there
    pub fn request_section_scroll(&self, section: &str) {
        store_set_pending_scroll(&self.store, section);
    }

    /// Consume the pending scroll intent, at most once
    pub fn take_section_scroll(&self) -> Option<String> {
        store_take_pending_scroll(&self.store)
    }

    pub fn token(&self) -> Option<String> {
        store_token(&self.store)
    }

    pub fn admin_name(&self) -> Option<String> {
        store_admin_name(&self.store)
    }

    /// Refresh the stored admin profile and re-persist the session
    pub fn update_admin(&self, admin: Admin) {
        store_update_admin(&self.store, admin);
        if let Some(session) = self.store.session().get_untracked() {
            session::persist(&session);
        }
    }

    /// Establish a session after login
    pub fn begin_session(&self, session: Session) {
        session::persist(&session);
        store_set_session(&self.store, Some(session));
    }

    /// Drop the session on logout or authorization denial
    pub fn end_session(&self) {
        session::clear();
        store_set_session(&self.store, None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
