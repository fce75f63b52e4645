//! Project Filter Tabs Component
//!
//! Desktop renders a button row, narrow layouts a select. Both drive
//! the same `ProjectFilter` value.

use leptos::prelude::*;

use crate::api::ProjectFilter;
use crate::context::use_app_context;
use crate::i18n::t;

#[component]
pub fn FilterTabs(
    active: ReadSignal<ProjectFilter>,
    #[prop(into)] on_select: Callback<ProjectFilter>,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filter-tabs">
            <div class="filter-tabs-desktop">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let is_active = move || active.get() == filter;
                        let tab_class = move || {
                            if is_active() { "filter-tab active" } else { "filter-tab" }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| on_select.run(filter)>
                                {move || t(ctx.language(), filter.label_key())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="filter-tabs-mobile">
                <select
                    class="filter-select"
                    prop:value=move || active.get().as_param().unwrap_or("all")
                    on:change=move |ev| {
                        if let Some(filter) = ProjectFilter::from_param(&event_target_value(&ev)) {
                            on_select.run(filter);
                        }
                    }
                >
                    {ProjectFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <option value=filter.as_param().unwrap_or("all")>
                                    {move || t(ctx.language(), filter.label_key())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
