//! Projects Preview Component
//!
//! Home-page strip of featured listings with the same filter tabs as
//! the full projects page. Cards deep-link to `/projects?id=`.

use leptos::prelude::*;
use leptos_loader::Loader;
use leptos_router::hooks::use_navigate;

use crate::api::{fetch_projects, ProjectFilter, ProjectQuery};
use crate::components::{Carousel, FilterTabs, ProjectCard};
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Project, ProjectStatus};

#[component]
pub fn ProjectsPreview() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (filter, set_filter) = signal(ProjectFilter::All);
    let loader: Loader<Vec<Project>> = Loader::new();

    // Desired request as a plain value; the effect below re-runs only
    // when the value actually changes
    let query = Memo::new(move |_| ProjectQuery::featured(ctx.language(), filter.get()));

    let run = move |q: ProjectQuery| {
        loader.load(async move {
            let list = fetch_projects(q).await?;
            Ok::<_, crate::api::ApiError>(
                list.into_iter()
                    .filter(|p| p.status == ProjectStatus::Active)
                    .collect::<Vec<_>>(),
            )
        })
    };

    Effect::new(move |_| run(query.get()));

    // Same request, fresh ticket
    let retry = move |_| run(query.get_untracked());

    let view_all = {
        let navigate = navigate.clone();
        move |_| navigate("/projects#title", Default::default())
    };
    let open_project = {
        let navigate = navigate.clone();
        Callback::new(move |id: String| {
            navigate(&format!("/projects?id={id}"), Default::default())
        })
    };

    let projects = move || loader.with(|s| s.ready().cloned().unwrap_or_default());

    view! {
        <section id="portfolio" class="portfolio-section">
            <div class="portfolio-container">
                <h2 class="section-title">{move || t(ctx.language(), "portfolio.title")}</h2>
                <div class="section-divider" />

                <FilterTabs active=filter on_select=move |f| set_filter.set(f) />

                <Show when=move || loader.with(|s| s.is_loading())>
                    <div class="section-loading">
                        <div class="spinner" />
                        <p>{move || t(ctx.language(), "projects.loading")}</p>
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.error().is_some())>
                    <div class="section-error">
                        <p>{move || t(ctx.language(), "projects.error")}</p>
                        <button class="retry-btn" on:click=retry>
                            {move || t(ctx.language(), "projects.retry")}
                        </button>
                    </div>
                </Show>

                <Show when=move || {
                    loader.with(|s| s.ready().is_some_and(|list| !list.is_empty()))
                }>
                    <Carousel>
                        <For
                            each=projects
                            key=|project| project.id.clone()
                            children=move |project| {
                                view! {
                                    <ProjectCard
                                        project=project
                                        selected=Signal::derive(|| false)
                                        on_select=open_project
                                    />
                                }
                            }
                        />
                    </Carousel>
                    <div class="portfolio-view-all">
                        <button class="btn-primary" on:click=view_all.clone()>
                            {move || t(ctx.language(), "portfolio.viewAll")}
                        </button>
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.ready().is_some_and(Vec::is_empty))>
                    <p class="section-empty">{move || t(ctx.language(), "portfolio.empty")}</p>
                </Show>
            </div>
        </section>
    }
}
