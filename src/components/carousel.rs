//! Carousel Component
//!
//! Scroll-snap strip with arrow paging. Pages by most of the visible
//! width so the last card of a page stays as context.

use leptos::prelude::*;

#[component]
pub fn Carousel(children: Children) -> impl IntoView {
    let strip = NodeRef::<leptos::html::Div>::new();

    let page_by = move |direction: f64| {
        if let Some(el) = strip.get_untracked() {
            let step = el.client_width() as f64 * 0.8;
            el.scroll_by_with_x_and_y(direction * step, 0.0);
        }
    };

    view! {
        <div class="carousel">
            <button class="carousel-arrow carousel-prev" on:click=move |_| page_by(-1.0)>
                "‹"
            </button>
            <div class="carousel-strip" node_ref=strip>
                {children()}
            </div>
            <button class="carousel-arrow carousel-next" on:click=move |_| page_by(1.0)>
                "›"
            </button>
        </div>
    }
}
