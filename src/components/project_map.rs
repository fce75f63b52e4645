//! Project Map Component
//!
//! Plots the fetched projects over an OpenStreetMap embed. Locations
//! are geocoded per project; items that fail to geocode are skipped
//! and the rest are still plotted. Pin clicks drive the selection.

use leptos::prelude::*;
use leptos_loader::Loader;

use crate::api::ApiError;
use crate::context::use_app_context;
use crate::geocode::{
    embed_url, geocode_projects, pin_position, GeoBounds, GeoPoint, ProjectPin, DEFAULT_CENTER,
};
use crate::i18n::t;
use crate::models::{Project, TextField};

/// Padding fraction keeping pins away from the frame edge
const BOUNDS_PAD: f64 = 0.15;

#[component]
pub fn ProjectMap(
    #[prop(into)] projects: Signal<Vec<Project>>,
    #[prop(into)] selected_id: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let loader: Loader<Vec<ProjectPin>> = Loader::new();

    Effect::new(move |_| {
        let list = projects.get();
        let lang = ctx.language();
        loader.load(async move { Ok::<_, ApiError>(geocode_projects(&list, lang).await) });
    });

    let pins = Memo::new(move |_| loader.with(|s| s.ready().cloned().unwrap_or_default()));

    let bounds = Memo::new(move |_| {
        pins.with(|pins| {
            GeoBounds::from_points(pins.iter().map(|p| &p.point))
                .unwrap_or(GeoBounds {
                    min_lat: DEFAULT_CENTER.lat,
                    max_lat: DEFAULT_CENTER.lat,
                    min_lon: DEFAULT_CENTER.lon,
                    max_lon: DEFAULT_CENTER.lon,
                })
                .padded(BOUNDS_PAD)
        })
    });

    let marker = Memo::new(move |_| {
        let selected = selected_id.get();
        pins.with(|pins| {
            selected
                .and_then(|id| pins.iter().find(|p| p.project_id == id))
                .map(|p| p.point)
                .unwrap_or_else(|| bounds.get().center())
        })
    });

    let selected_location = move || {
        let selected = selected_id.get();
        projects.with(|list| {
            selected
                .and_then(|id| list.iter().find(|p| p.id == id))
                .and_then(|p| p.text(TextField::Location, ctx.language()).map(String::from))
        })
        .unwrap_or_else(|| t(ctx.language(), "projectDetails.selectProperty"))
    };

    let pin_views = move || {
        let frame = bounds.get();
        pins.get()
            .into_iter()
            .map(|pin| {
                let (x, y) = pin_position(pin.point, frame, 100.0, 100.0);
                let id = pin.project_id.clone();
                let is_active = {
                    let id = id.clone();
                    move || selected_id.get().as_deref() == Some(id.as_str())
                };
                view! {
                    <button
                        class="map-pin"
                        class:active=is_active
                        style=format!("left:{x:.2}%;top:{y:.2}%;")
                        on:click=move |_| on_select.run(id.clone())
                    >
                        "📍"
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="map-container">
            <iframe
                class="map-frame"
                title="Property map"
                src=move || {
                    let frame = bounds.get();
                    let point: GeoPoint = marker.get();
                    embed_url(frame, point)
                }
            />
            <div class="map-pin-layer">{pin_views}</div>

            <Show when=move || loader.with(|s| s.is_loading())>
                <div class="map-status">{move || t(ctx.language(), "projects.map.locating")}</div>
            </Show>
            <Show when=move || loader.with(|s| s.ready().is_some_and(Vec::is_empty))>
                <div class="map-status">{move || t(ctx.language(), "projects.map.none")}</div>
            </Show>

            <div class="map-info-overlay">
                <p class="map-location-text">{selected_location}</p>
            </div>
        </div>
    }
}
