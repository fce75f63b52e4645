//! Contact Section Component
//!
//! Public lead form. Submission failures surface as a toast; success
//! shows a confirmation and resets the form after a short hold.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::submit_lead;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::LeadForm;

/// How long the "sent" confirmation stays before the form resets
const SENT_HOLD_MS: u32 = 3000;

const INQUIRY_TYPES: [(&str, &str); 4] = [
    ("buying", "contact.form.interest.buying"),
    ("selling", "contact.form.interest.selling"),
    ("renting", "contact.form.interest.renting"),
    ("courses", "contact.form.interest.courses"),
];

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (interest, set_interest) = signal("buying".to_string());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let reset_form = move || {
        set_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_interest.set("buying".to_string());
        set_message.set(String::new());
        set_submitted.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let form = LeadForm {
            full_name: name.get_untracked(),
            email: email.get_untracked(),
            phone_number: phone.get_untracked(),
            inquiry_type: interest.get_untracked(),
            message: message.get_untracked(),
        };

        spawn_local(async move {
            match submit_lead(&form).await {
                Ok(()) => {
                    set_submitting.set(false);
                    set_submitted.set(true);
                    TimeoutFuture::new(SENT_HOLD_MS).await;
                    reset_form();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[Contact] lead submission failed: {err}").into(),
                    );
                    set_submitting.set(false);
                    ctx.toast(&t(ctx.language(), "contact.form.failed"));
                }
            }
        });
    };

    let submit_label = move || {
        let lang = ctx.language();
        if submitting.get() {
            t(lang, "contact.form.sending")
        } else {
            t(lang, "contact.form.submit")
        }
    };

    view! {
        <section id="contact" class="contact-section">
            <div class="contact-container">
                <h2 class="section-title">{move || t(ctx.language(), "contact.title")}</h2>
                <p class="contact-subtitle">{move || t(ctx.language(), "contact.subtitle")}</p>
                <div class="section-divider" />

                <Show
                    when=move || !submitted.get()
                    fallback=move || {
                        view! {
                            <p class="contact-sent">
                                {move || t(ctx.language(), "contact.form.sent")}
                            </p>
                        }
                    }
                >
                    <form class="contact-form" on:submit=on_submit>
                        <input
                            class="form-input"
                            type="text"
                            required
                            placeholder=move || t(ctx.language(), "contact.form.name")
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            class="form-input"
                            type="email"
                            required
                            placeholder=move || t(ctx.language(), "contact.form.email")
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <input
                            class="form-input"
                            type="tel"
                            required
                            placeholder=move || t(ctx.language(), "contact.form.phone")
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                        <select
                            class="form-input"
                            prop:value=interest
                            on:change=move |ev| set_interest.set(event_target_value(&ev))
                        >
                            {INQUIRY_TYPES
                                .into_iter()
                                .map(|(value, key)| {
                                    view! {
                                        <option value=value>
                                            {move || t(ctx.language(), key)}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <textarea
                            class="form-input form-textarea"
                            required
                            placeholder=move || t(ctx.language(), "contact.form.message")
                            prop:value=message
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        />
                        <button class="btn-primary" type="submit" disabled=submitting>
                            {submit_label}
                        </button>
                    </form>
                </Show>
            </div>
        </section>
    }
}
