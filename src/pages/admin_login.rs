//! Admin Login Page
//!
//! Creates the explicit session on success. An existing session skips
//! straight to the leads dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::admin_login;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::session::Session;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Already logged in: go to the dashboard
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if ctx.token().is_some() {
                navigate("/admin/leads", Default::default());
            }
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            set_submitting.set(true);

            let email = email.get_untracked();
            let password = password.get_untracked();
            let navigate = navigate.clone();
            spawn_local(async move {
                match admin_login(&email, &password).await {
                    Ok(response) => {
                        ctx.begin_session(Session::new(response.token, response.admin));
                        set_submitting.set(false);
                        navigate("/admin/leads", Default::default());
                    }
                    Err(err) => {
                        set_submitting.set(false);
                        ctx.toast(&err.to_string());
                    }
                }
            });
        }
    };

    let submit_label = move || {
        let lang = ctx.language();
        if submitting.get() {
            t(lang, "admin.login.signingIn")
        } else {
            t(lang, "admin.login.submit")
        }
    };

    view! {
        <div class="admin-login-page">
            <form class="admin-login-form" on:submit=on_submit>
                <h1 class="admin-login-title">
                    {move || t(ctx.language(), "admin.login.title")}
                </h1>
                <input
                    class="form-input"
                    type="email"
                    required
                    placeholder=move || t(ctx.language(), "admin.login.email")
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="password"
                    required
                    placeholder=move || t(ctx.language(), "admin.login.password")
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button class="btn-primary" type="submit" disabled=submitting>
                    {submit_label}
                </button>
            </form>
        </div>
    }
}
