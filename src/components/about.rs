//! About Section Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::t;

const STATS: [(&str, &str); 3] = [
    ("120+", "about.stats.properties"),
    ("250+", "about.stats.clients"),
    ("15+", "about.stats.years"),
];

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section id="about" class="about-section">
            <div class="about-container">
                <h2 class="section-title">{move || t(ctx.language(), "about.title")}</h2>
                <div class="section-divider" />
                <p class="about-body">{move || t(ctx.language(), "about.body")}</p>

                <div class="about-stats">
                    {STATS
                        .into_iter()
                        .map(|(value, key)| {
                            view! {
                                <div class="about-stat">
                                    <span class="about-stat-value">{value}</span>
                                    <span class="about-stat-label">
                                        {move || t(ctx.language(), key)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
