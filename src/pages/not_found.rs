//! 404 Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="not-found-page">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-text">{move || t(ctx.language(), "notFound.title")}</p>
            <a href="/" class="btn-primary">
                {move || t(ctx.language(), "notFound.home")}
            </a>
        </div>
    }
}
