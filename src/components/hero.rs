//! Hero Component
//!
//! Full-viewport intro with a looping muted background video. Playback
//! is best-effort; autoplay denial is logged, never surfaced.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::context::use_app_context;
use crate::i18n::t;
use crate::scroll::scroll_to_id;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    let video = NodeRef::<leptos::html::Video>::new();

    // Mobile browsers re-check the muted flag at play time, so set it
    // imperatively before asking for playback
    Effect::new(move |_| {
        if let Some(el) = video.get() {
            el.set_muted(true);
            if let Ok(promise) = el.play() {
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        web_sys::console::log_1(&"[Hero] autoplay prevented".into());
                    }
                });
            }
        }
    });

    view! {
        <section id="home" class="hero-section">
            <div class="hero-video-container">
                <video
                    node_ref=video
                    class="hero-video"
                    autoplay
                    muted
                    loop
                    playsinline
                    preload="auto"
                >
                    <source src="/media/hero.mp4" type="video/mp4" />
                </video>
                <div class="hero-video-overlay" />
            </div>

            <div class="hero-content">
                <div class="hero-logo" dir="ltr">
                    <span class="logo-all">"ALL"</span>
                    <span class="logo-in">"IN"</span>
                </div>
                <h2 class="hero-tagline">{move || t(ctx.language(), "hero.tagline")}</h2>
                <p class="hero-subtitle">{move || t(ctx.language(), "hero.subtitle")}</p>
                <div class="hero-buttons">
                    <button class="btn-primary" on:click=move |_| scroll_to_id("portfolio")>
                        {move || t(ctx.language(), "hero.cta.explore")}
                    </button>
                    <button class="btn-secondary" on:click=move |_| scroll_to_id("contact")>
                        {move || t(ctx.language(), "hero.cta.contact")}
                    </button>
                </div>
            </div>

            <div class="hero-scroll-indicator" on:click=move |_| scroll_to_id("about")>
                "▾"
            </div>
        </section>
    }
}
