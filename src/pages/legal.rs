//! Legal Pages
//!
//! Static localized text pages linked from the footer.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;

#[component]
fn LegalPage(title_key: &'static str, body_keys: &'static [&'static str]) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="legal-page">
            <section class="page-hero">
                <h1 class="page-hero-title">{move || t(ctx.language(), title_key)}</h1>
                <div class="section-divider" />
            </section>
            <div class="legal-container">
                {body_keys
                    .iter()
                    .map(|key| {
                        view! {
                            <p class="legal-paragraph">{move || t(ctx.language(), key)}</p>
                        }
                    })
                    .collect_view()}
                <p class="legal-updated">{move || t(ctx.language(), "legal.updated")}</p>
            </div>
        </div>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <LegalPage
            title_key="footer.privacy"
            body_keys=&["legal.privacy.intro", "legal.privacy.data", "legal.privacy.contact"]
        />
    }
}

#[component]
pub fn TermsOfUsePage() -> impl IntoView {
    view! {
        <LegalPage
            title_key="footer.terms"
            body_keys=&["legal.terms.intro", "legal.terms.content", "legal.terms.liability"]
        />
    }
}

#[component]
pub fn CookiePolicyPage() -> impl IntoView {
    view! {
        <LegalPage
            title_key="footer.cookies"
            body_keys=&["legal.cookies.intro", "legal.cookies.usage", "legal.cookies.manage"]
        />
    }
}
