//! Lead Delete Control
//!
//! Two-step delete for a lead card: the first click arms the control,
//! a localized prompt then offers delete/keep. Disarming never fires
//! the callback.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;

#[component]
pub fn LeadDeleteControl(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (armed, set_armed) = signal(false);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                view! {
                    <button
                        class="lead-delete-btn"
                        aria-label=move || t(ctx.language(), "admin.leads.delete")
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="lead-delete-confirm">
                <span class="lead-delete-prompt">
                    {move || t(ctx.language(), "admin.leads.deletePrompt")}
                </span>
                <button
                    class="lead-confirm-yes"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    {move || t(ctx.language(), "admin.leads.deleteYes")}
                </button>
                <button
                    class="lead-confirm-no"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    {move || t(ctx.language(), "admin.leads.deleteNo")}
                </button>
            </span>
        </Show>
    }
}
