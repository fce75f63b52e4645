//! Footer Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::i18n::t;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <footer class="footer">
            <div class="footer-brand" dir="ltr">
                <span class="logo-all">"ALL"</span>
                <span class="logo-in">"IN"</span>
            </div>
            <div class="footer-links">
                <A href="/privacy-policy">{move || t(ctx.language(), "footer.privacy")}</A>
                <A href="/terms-of-use">{move || t(ctx.language(), "footer.terms")}</A>
                <A href="/cookie-policy">{move || t(ctx.language(), "footer.cookies")}</A>
            </div>
            <p class="footer-rights">
                {move || format!("© 2025 ALL IN. {}", t(ctx.language(), "footer.rights"))}
            </p>
        </footer>
    }
}
