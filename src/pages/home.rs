//! Home Page
//!
//! All marketing sections in one scrollable page. A pending scroll
//! intent left by another page is consumed exactly once after mount.

use leptos::prelude::*;

use crate::components::{
    About, Contact, Hero, ProjectsPreview, ServicesSection, TestimonialsSection,
};
use crate::context::use_app_context;
use crate::scroll::scroll_to_id_settled;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(section) = ctx.take_section_scroll() {
            scroll_to_id_settled(&section);
        }
    });

    view! {
        <div class="home-page">
            <Hero />
            <About />
            <ProjectsPreview />
            <ServicesSection />
            <TestimonialsSection />
            <Contact />
        </div>
    }
}
