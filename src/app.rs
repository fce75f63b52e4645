//! Application Root
//!
//! Builds the global store (restoring the saved language and any admin
//! session), provides the app context, and mounts the router inside
//! the shared navbar/footer layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Footer, Navbar, ToastHost};
use crate::context::AppContext;
use crate::i18n;
use crate::pages::{
    AdminLeadsPage, AdminLoginPage, CookiePolicyPage, CoursesPage, HomePage, NotFound,
    PrivacyPolicyPage, ProjectsPage, TeamPage, TermsOfUsePage,
};
use crate::session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let language = i18n::load_saved_lang().unwrap_or_default();
    // Document lang/dir reflect the persisted choice from the start
    i18n::apply_lang(language);

    let store = Store::new(AppState {
        language,
        session: session::restore(),
        ..Default::default()
    });
    provide_context(store);
    provide_context(AppContext::new(store));

    view! {
        <Router>
            <div class="main-layout">
                <Navbar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/team") view=TeamPage />
                        <Route path=path!("/courses") view=CoursesPage />
                        <Route path=path!("/privacy-policy") view=PrivacyPolicyPage />
                        <Route path=path!("/terms-of-use") view=TermsOfUsePage />
                        <Route path=path!("/cookie-policy") view=CookiePolicyPage />
                        <Route path=path!("/admin/login") view=AdminLoginPage />
                        <Route path=path!("/admin/leads") view=AdminLeadsPage />
                    </Routes>
                </main>
                <Footer />
            </div>
            <ToastHost />
        </Router>
    }
}
