//! Language Switcher Component
//!
//! Dropdown over the supported languages. Switching updates the store,
//! the document `lang`/`dir` attributes, and localStorage.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Lang;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);

    view! {
        <div class="lang-switcher">
            <button class="lang-switcher-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || ctx.language().label()}
                <span class="lang-switcher-chevron" class:open=move || open.get()>
                    "▾"
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="lang-switcher-menu">
                    {Lang::ALL
                        .into_iter()
                        .map(|lang| {
                            let is_active = move || ctx.language() == lang;
                            view! {
                                <button
                                    class="lang-switcher-option"
                                    class:active=is_active
                                    on:click=move |_| {
                                        ctx.set_language(lang);
                                        set_open.set(false);
                                    }
                                >
                                    {lang.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
