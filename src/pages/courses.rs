//! Courses Page

use leptos::prelude::*;
use leptos_loader::Loader;

use crate::api::fetch_courses;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::Course;

fn price_label(course: &Course, free_label: &str) -> String {
    if course.price > 0.0 {
        let symbol = match course.currency.as_str() {
            "ILS" => "₪",
            "USD" => "$",
            _ => "€",
        };
        format!("{symbol}{:.0}", course.price)
    } else {
        free_label.to_string()
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let ctx = use_app_context();
    let loader: Loader<Vec<Course>> = Loader::new();

    Effect::new(move |_| {
        let lang = ctx.language();
        loader.load(fetch_courses(lang, None));
    });

    view! {
        <div class="courses-page">
            <section class="page-hero">
                <h1 class="page-hero-title">{move || t(ctx.language(), "courses.title")}</h1>
                <div class="section-divider" />
                <p class="page-hero-subtitle">
                    {move || t(ctx.language(), "courses.subtitle")}
                </p>
            </section>

            <div class="courses-container">
                <Show when=move || loader.with(|s| s.is_loading())>
                    <div class="section-loading">
                        <div class="spinner" />
                        <p>{move || t(ctx.language(), "courses.loading")}</p>
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.error().is_some())>
                    <p class="section-error">{move || t(ctx.language(), "courses.error")}</p>
                </Show>

                <Show when=move || loader.with(|s| s.ready().is_some_and(Vec::is_empty))>
                    <p class="section-empty">{move || t(ctx.language(), "courses.empty")}</p>
                </Show>

                <div class="courses-grid">
                    <For
                        each=move || loader.with(|s| s.ready().cloned().unwrap_or_default())
                        key=|course| course.id.clone()
                        children=move |course| {
                            let price = Memo::new({
                                let course = course.clone();
                                move |_| {
                                    price_label(&course, &t(ctx.language(), "courses.free"))
                                }
                            });
                            view! {
                                <div class="course-card">
                                    {course
                                        .image
                                        .clone()
                                        .map(|image| {
                                            view! {
                                                <img
                                                    class="course-image"
                                                    src=image
                                                    alt=course.title.clone()
                                                />
                                            }
                                        })}
                                    <div class="course-info">
                                        <h3 class="course-title">{course.title.clone()}</h3>
                                        <p class="course-description">
                                            {course.description.clone()}
                                        </p>
                                        <div class="course-meta">
                                            {course
                                                .duration
                                                .clone()
                                                .map(|d| view! { <span class="course-chip">{d}</span> })}
                                            {course
                                                .level
                                                .clone()
                                                .map(|l| view! { <span class="course-chip">{l}</span> })}
                                            {course
                                                .instructor
                                                .clone()
                                                .map(|i| view! { <span class="course-chip">{i}</span> })}
                                        </div>
                                        <p class="course-price">{move || price.get()}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
