//! Services Section Component
//!
//! Localized service cards fetched from the backend. Refetches when the
//! language changes; a superseded response never lands.

use leptos::prelude::*;
use leptos_loader::Loader;

use crate::api::fetch_services;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::Service;

#[component]
pub fn ServicesSection() -> impl IntoView {
    let ctx = use_app_context();
    let loader: Loader<Vec<Service>> = Loader::new();

    Effect::new(move |_| {
        let lang = ctx.language();
        loader.load(fetch_services(lang));
    });

    view! {
        <section id="services" class="services-section">
            <div class="services-container">
                <h2 class="section-title">{move || t(ctx.language(), "services.title")}</h2>
                <div class="section-divider" />

                <Show when=move || loader.with(|s| s.is_loading())>
                    <div class="section-loading">
                        <div class="spinner" />
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.error().is_some())>
                    <p class="section-error">{move || t(ctx.language(), "services.error")}</p>
                </Show>

                <div class="services-grid">
                    <For
                        each=move || loader.with(|s| s.ready().cloned().unwrap_or_default())
                        key=|service| service.id.clone()
                        children=move |service| {
                            view! {
                                <div class="service-card">
                                    {service
                                        .icon
                                        .clone()
                                        .map(|icon| view! { <span class="service-icon">{icon}</span> })}
                                    <h3 class="service-title">{service.title.clone()}</h3>
                                    <p class="service-description">{service.description.clone()}</p>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
