//! Admin Leads Dashboard
//!
//! Session-guarded page: stats row, status/inquiry filters, lead cards
//! with contact/close transitions and delete. Any 401 ends the session
//! and returns to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_loader::Loader;
use leptos_router::hooks::use_navigate;

use crate::api::{
    close_lead, delete_lead, fetch_lead_stats, fetch_leads, fetch_me, mark_lead_contacted,
    ApiError, LeadFilters,
};
use crate::components::LeadDeleteControl;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Lead, LeadStats};

const STATUS_OPTIONS: [&str; 4] = ["all", "new", "contacted", "closed"];
const INQUIRY_OPTIONS: [&str; 5] = ["all", "buying", "selling", "renting", "courses"];

#[component]
pub fn AdminLeadsPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    // Guard: no session means no dashboard
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if ctx.token().is_none() {
                navigate("/admin/login", Default::default());
            }
        });
    }

    // Refresh the profile shown in the header once per visit
    if let Some(token) = ctx.token() {
        spawn_local(async move {
            match fetch_me(&token).await {
                Ok(admin) => ctx.update_admin(admin),
                Err(ApiError::Unauthorized) => ctx.end_session(),
                Err(_) => {}
            }
        });
    }

    let (status_filter, set_status_filter) = signal("all".to_string());
    let (inquiry_filter, set_inquiry_filter) = signal("all".to_string());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let leads: Loader<Vec<Lead>> = Loader::new();
    let stats: Loader<LeadStats> = Loader::new();

    let filters = Memo::new(move |_| LeadFilters {
        view: None,
        status: Some(status_filter.get()),
        inquiry_type: Some(inquiry_filter.get()),
    });

    // Ending the session flips the guard above back to the login page
    Effect::new(move |_| {
        let f = filters.get();
        let _ = reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        leads.load(async move {
            let result = fetch_leads(&f, &token).await;
            if matches!(result, Err(ApiError::Unauthorized)) {
                ctx.end_session();
            }
            result
        });
    });

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        stats.load(async move {
            let result = fetch_lead_stats("all", &token).await;
            if matches!(result, Err(ApiError::Unauthorized)) {
                ctx.end_session();
            }
            result
        });
    });

    // Shared outcome handling for the mutating actions
    let after_mutation = {
        let navigate = navigate.clone();
        move |result: Result<(), ApiError>| match result {
            Ok(()) => set_reload_trigger.update(|n| *n += 1),
            Err(ApiError::Unauthorized) => {
                ctx.end_session();
                navigate("/admin/login", Default::default());
            }
            Err(err) => ctx.toast(&err.to_string()),
        }
    };

    let mark_contacted = {
        let after_mutation = after_mutation.clone();
        move |id: String| {
            let Some(token) = ctx.token() else { return };
            let after_mutation = after_mutation.clone();
            spawn_local(async move {
                after_mutation(mark_lead_contacted(&id, &token).await.map(|_| ()));
            });
        }
    };

    let close = {
        let after_mutation = after_mutation.clone();
        move |id: String| {
            let Some(token) = ctx.token() else { return };
            let after_mutation = after_mutation.clone();
            spawn_local(async move {
                after_mutation(close_lead(&id, &token).await.map(|_| ()));
            });
        }
    };

    let remove = {
        let after_mutation = after_mutation.clone();
        move |id: String| {
            let Some(token) = ctx.token() else { return };
            let after_mutation = after_mutation.clone();
            spawn_local(async move {
                after_mutation(delete_lead(&id, &token).await);
            });
        }
    };

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            ctx.end_session();
            navigate("/admin/login", Default::default());
        }
    };

    let stat_row = move || {
        stats.with(|s| s.ready().cloned()).map(|s| {
            let lang = ctx.language();
            view! {
                <div class="leads-stats">
                    <div class="leads-stat">
                        <span class="leads-stat-value">{s.total}</span>
                        <span class="leads-stat-label">{t(lang, "admin.leads.stats.total")}</span>
                    </div>
                    <div class="leads-stat">
                        <span class="leads-stat-value">{s.new}</span>
                        <span class="leads-stat-label">{t(lang, "admin.leads.stats.new")}</span>
                    </div>
                    <div class="leads-stat">
                        <span class="leads-stat-value">{s.contacted}</span>
                        <span class="leads-stat-label">
                            {t(lang, "admin.leads.stats.contacted")}
                        </span>
                    </div>
                    <div class="leads-stat">
                        <span class="leads-stat-value">{s.closed}</span>
                        <span class="leads-stat-label">{t(lang, "admin.leads.stats.closed")}</span>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="admin-leads-page">
            <div class="leads-header">
                <h1 class="leads-title">{move || t(ctx.language(), "admin.leads.title")}</h1>
                {move || {
                    ctx.admin_name()
                        .map(|name| view! { <span class="leads-admin-name">{name}</span> })
                }}
                <button class="btn-secondary" on:click=logout>
                    {move || t(ctx.language(), "admin.leads.logout")}
                </button>
            </div>

            {stat_row}

            <div class="leads-filters">
                <select
                    class="form-input"
                    prop:value=status_filter
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    {STATUS_OPTIONS
                        .into_iter()
                        .map(|value| view! { <option value=value>{value}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form-input"
                    prop:value=inquiry_filter
                    on:change=move |ev| set_inquiry_filter.set(event_target_value(&ev))
                >
                    {INQUIRY_OPTIONS
                        .into_iter()
                        .map(|value| view! { <option value=value>{value}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || leads.with(|s| s.is_loading())>
                <div class="section-loading">
                    <div class="spinner" />
                </div>
            </Show>

            <Show when=move || leads.with(|s| s.error().is_some())>
                <p class="section-error">{move || t(ctx.language(), "admin.leads.error")}</p>
            </Show>

            <Show when=move || leads.with(|s| s.ready().is_some_and(Vec::is_empty))>
                <p class="section-empty">{move || t(ctx.language(), "admin.leads.empty")}</p>
            </Show>

            <div class="leads-list">
                <For
                    each=move || leads.with(|s| s.ready().cloned().unwrap_or_default())
                    key=|lead| (lead.id.clone(), lead.status.clone())
                    children={
                        let mark_contacted = mark_contacted.clone();
                        let close = close.clone();
                        let remove = remove.clone();
                        move |lead| {
                            let id = lead.id.clone();
                            let contact_id = id.clone();
                            let close_id = id.clone();
                            let mark_contacted = mark_contacted.clone();
                            let close = close.clone();
                            let remove = remove.clone();
                            let status = lead.status.clone();
                            let is_new = status == "new";
                            let is_open = status != "closed";
                            view! {
                                <div class="lead-card">
                                    <div class="lead-card-header">
                                        <h3 class="lead-name">{lead.full_name.clone()}</h3>
                                        <span class=format!("lead-status lead-status-{status}")>
                                            {status.clone()}
                                        </span>
                                        <LeadDeleteControl on_confirm={
                                            let id = id.clone();
                                            let remove = remove.clone();
                                            move |_| remove(id.clone())
                                        } />
                                    </div>
                                    <p class="lead-contact">
                                        {format!("{} · {}", lead.email, lead.phone_number)}
                                    </p>
                                    <p class="lead-inquiry">{lead.inquiry_type.clone()}</p>
                                    <p class="lead-message">{lead.message.clone()}</p>
                                    {lead
                                        .created_at
                                        .clone()
                                        .map(|at| view! { <p class="lead-created">{at}</p> })}
                                    <div class="lead-actions">
                                        <Show when=move || is_new>
                                            <button
                                                class="btn-secondary"
                                                on:click={
                                                    let id = contact_id.clone();
                                                    let mark_contacted = mark_contacted.clone();
                                                    move |_| mark_contacted(id.clone())
                                                }
                                            >
                                                {move || {
                                                    t(ctx.language(), "admin.leads.markContacted")
                                                }}
                                            </button>
                                        </Show>
                                        <Show when=move || is_open>
                                            <button
                                                class="btn-secondary"
                                                on:click={
                                                    let id = close_id.clone();
                                                    let close = close.clone();
                                                    move |_| close(id.clone())
                                                }
                                            >
                                                {move || t(ctx.language(), "admin.leads.close")}
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}
