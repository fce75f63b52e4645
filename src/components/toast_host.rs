//! Toast Host Component
//!
//! Renders the active toast queue from the store at the app root.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| ctx.remove_toast(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
