//! Projects Page
//!
//! The browsing flow: fetch the localized, filtered list, resolve the
//! active selection against the deep link and the previous in-session
//! choice, and keep scroll position and the map/details toggle in sync
//! with it. Loading, error, and empty are mutually exclusive states.

use leptos::prelude::*;
use leptos_loader::Loader;
use leptos_router::hooks::use_query_map;

use crate::api::{fetch_projects, ApiError, ProjectFilter, ProjectQuery};
use crate::components::{Carousel, FilterTabs, ProjectCard, ProjectDetails, ProjectMap};
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Project, ProjectStatus};
use crate::scroll::{is_narrow_viewport, scroll_to_id_settled, scroll_to_selector_settled};
use crate::selection::resolve_selection;

/// Sub-view shown in the toggled region on constrained layouts.
/// Only an explicit toggle click changes it; selection never does.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PanelView {
    Map,
    Details,
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();

    // Deep-link id, read once per navigation
    let address_id = use_query_map().with_untracked(|q| q.get("id"));

    let (filter, set_filter) = signal(ProjectFilter::All);
    let (selected_id, set_selected_id) = signal::<Option<String>>(None);
    let (panel, set_panel) = signal(PanelView::Details);

    let loader: Loader<Vec<Project>> = Loader::new();

    // Desired request as a pure value of (language, filter); the fetch
    // effect re-runs only when this value changes
    let query = Memo::new(move |_| ProjectQuery::new(ctx.language(), filter.get()));

    let run = move |q: ProjectQuery| {
        loader.load(async move {
            let list = fetch_projects(q).await?;
            Ok::<_, ApiError>(
                list.into_iter()
                    .filter(|p| p.status == ProjectStatus::Active)
                    .collect::<Vec<_>>(),
            )
        })
    };

    Effect::new(move |_| run(query.get()));

    // Same request, fresh ticket
    let retry = move |_| run(query.get_untracked());

    // Reconcile the selection each time a fetch settles with data
    {
        let address_id = address_id.clone();
        Effect::new(move |_| {
            loader.with(|state| {
                if let Some(list) = state.ready() {
                    let previous = selected_id.get_untracked();
                    let next =
                        resolve_selection(list, address_id.as_deref(), previous.as_deref());
                    set_selected_id.set(next);
                }
            });
        });
    }

    // Deep-linked resolution scrolls to the carousel once, not on
    // later re-renders
    let deep_link_pending = StoredValue::new(address_id.is_some());
    Effect::new(move |_| {
        let settled = loader.with(|s| !s.is_loading());
        let resolved = selected_id.with(Option::is_some);
        if settled && resolved && deep_link_pending.get_value() {
            deep_link_pending.set_value(false);
            scroll_to_selector_settled(".projects-carousel-section");
        }
    });

    // `#title` hash scrolls to the hero once loading ends
    let hash_pending = StoredValue::new(
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .is_some_and(|h| h == "#title"),
    );
    Effect::new(move |_| {
        let settled = loader.with(|s| !s.is_loading());
        if settled && hash_pending.get_value() {
            hash_pending.set_value(false);
            scroll_to_id_settled("title");
        }
    });

    let select_project = move |id: String| {
        set_selected_id.set(Some(id));
        // On narrow viewports bring the details panel into view;
        // skipped silently if the anchor is not mounted
        if is_narrow_viewport() {
            scroll_to_id_settled("project-details");
        }
    };

    let projects = Signal::derive(move || {
        loader.with(|s| s.ready().cloned().unwrap_or_default())
    });

    let selected_project = Memo::new(move |_| {
        let id = selected_id.get();
        loader.with(|s| {
            s.ready().and_then(|list| {
                id.as_deref().and_then(|id| list.iter().find(|p| p.id == id).cloned())
            })
        })
    });

    let has_projects =
        move || loader.with(|s| s.ready().is_some_and(|list| !list.is_empty()));

    view! {
        <div class="projects-page">
            <section id="title" class="projects-hero">
                <h1 class="projects-hero-title">{move || t(ctx.language(), "projects.title")}</h1>
                <div class="section-divider" />
                <p class="projects-hero-subtitle">
                    {move || t(ctx.language(), "projects.subtitle")}
                </p>
            </section>

            <div class="projects-container">
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

                <Show when=has_projects>
                    <div class="projects-carousel-section">
                        <Carousel>
                            <For
                                each=move || projects.get()
                                key=|project| project.id.clone()
                                children=move |project| {
                                    let id = project.id.clone();
                                    let is_selected = Signal::derive({
                                        let id = id.clone();
                                        move || {
                                            selected_id.get().as_deref() == Some(id.as_str())
                                        }
                                    });
                                    view! {
                                        <ProjectCard
                                            project=project
                                            selected=is_selected
                                            on_select=select_project
                                        />
                                    }
                                }
                            />
                        </Carousel>
                    </div>

                    <div class="projects-details-section">
                        <div class="projects-toggle-tabs">
                            <button
                                class="projects-toggle-btn"
                                class:active=move || panel.get() == PanelView::Map
                                on:click=move |_| set_panel.set(PanelView::Map)
                            >
                                {move || t(ctx.language(), "projects.toggles.map")}
                            </button>
                            <button
                                class="projects-toggle-btn"
                                class:active=move || panel.get() == PanelView::Details
                                on:click=move |_| set_panel.set(PanelView::Details)
                            >
                                {move || t(ctx.language(), "projects.toggles.details")}
                            </button>
                        </div>

                        <div class="projects-details-grid">
                            <div
                                class="projects-map-column"
                                class:visible=move || panel.get() == PanelView::Map
                            >
                                <ProjectMap
                                    projects=projects
                                    selected_id=selected_id
                                    on_select=select_project
                                />
                            </div>
                            <div
                                id="project-details"
                                class="projects-details-column"
                                class:visible=move || panel.get() == PanelView::Details
                            >
                                <ProjectDetails project=selected_project />
                            </div>
                        </div>
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.ready().is_some_and(Vec::is_empty))>
                    <div class="section-empty">
                        <h3>{move || t(ctx.language(), "projects.noProperties")}</h3>
                    </div>
                </Show>
            </div>
        </div>
    }
}
