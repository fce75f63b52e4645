//! Testimonials Section Component
//!
//! Client quotes in a paging carousel, featured entries first.

use leptos::prelude::*;
use leptos_loader::Loader;

use crate::api::fetch_testimonials;
use crate::components::Carousel;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::Testimonial;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let ctx = use_app_context();
    let loader: Loader<Vec<Testimonial>> = Loader::new();

    Effect::new(move |_| {
        let lang = ctx.language();
        loader.load(async move {
            let mut list = fetch_testimonials(lang, false).await?;
            // Featured first, backend order preserved within each group
            list.sort_by_key(|t| !t.featured);
            Ok::<_, crate::api::ApiError>(list)
        });
    });

    let testimonials = move || loader.with(|s| s.ready().cloned().unwrap_or_default());

    view! {
        <section id="testimonials" class="testimonials-section">
            <div class="testimonials-container">
                <h2 class="section-title">{move || t(ctx.language(), "testimonials.title")}</h2>
                <div class="section-divider" />

                <Show when=move || loader.with(|s| s.is_loading())>
                    <div class="section-loading">
                        <div class="spinner" />
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.error().is_some())>
                    <p class="section-error">
                        {move || t(ctx.language(), "testimonials.error")}
                    </p>
                </Show>

                <Show when=move || !testimonials().is_empty()>
                    <Carousel>
                        <For
                            each=testimonials
                            key=|item| item.id.clone()
                            children=move |item| {
                                view! {
                                    <div class="testimonial-card">
                                        <p class="testimonial-text">{format!("“{}”", item.text)}</p>
                                        <p class="testimonial-author">{item.author.clone()}</p>
                                        {item
                                            .location
                                            .clone()
                                            .map(|loc| {
                                                view! { <p class="testimonial-location">{loc}</p> }
                                            })}
                                    </div>
                                }
                            }
                        />
                    </Carousel>
                </Show>
            </div>
        </section>
    }
}
