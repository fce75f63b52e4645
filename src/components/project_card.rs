//! Project Card Component
//!
//! Carousel card for one listing: cover image, badge, localized title
//! and location, price label, selected indicator.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Project, TextField};

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = project.id.clone();
    let cover = project.cover_image().to_string();
    let badge = project.badge.clone().map(|b| b.to_uppercase());
    let price = project.price_label();

    let title = {
        let project = project.clone();
        move || project.text(TextField::Title, ctx.language()).unwrap_or_default().to_string()
    };
    let location = {
        let project = project.clone();
        move || project.text(TextField::Location, ctx.language()).unwrap_or_default().to_string()
    };

    view! {
        <div
            class="project-card"
            class:selected=selected
            on:click=move |_| on_select.run(id.clone())
        >
            <div class="project-card-image-wrapper">
                <img class="project-card-image" src=cover alt=title.clone() />
                {badge.map(|b| view! { <div class="project-card-badge">{b}</div> })}
                <Show when=move || selected.get()>
                    <div class="project-card-selected-indicator">"✓"</div>
                </Show>
            </div>
            <div class="project-card-info">
                <h3 class="project-card-title">{title.clone()}</h3>
                <p class="project-card-location">{location}</p>
                {price.map(|p| view! { <p class="project-card-price">{p}</p> })}
            </div>
        </div>
    }
}
