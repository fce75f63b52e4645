//! Team Page
//!
//! Localized team member list, refetched on language change.

use leptos::prelude::*;
use leptos_loader::Loader;

use crate::api::fetch_team;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::TeamMember;

#[component]
pub fn TeamPage() -> impl IntoView {
    let ctx = use_app_context();
    let loader: Loader<Vec<TeamMember>> = Loader::new();

    Effect::new(move |_| {
        let lang = ctx.language();
        loader.load(fetch_team(lang, false));
    });

    view! {
        <div class="team-page">
            <section class="page-hero">
                <h1 class="page-hero-title">{move || t(ctx.language(), "team.title")}</h1>
                <div class="section-divider" />
                <p class="page-hero-subtitle">{move || t(ctx.language(), "team.subtitle")}</p>
            </section>

            <div class="team-container">
                <Show when=move || loader.with(|s| s.is_loading())>
                    <div class="section-loading">
                        <div class="spinner" />
                    </div>
                </Show>

                <Show when=move || loader.with(|s| s.error().is_some())>
                    <p class="section-error">{move || t(ctx.language(), "team.error")}</p>
                </Show>

                <Show when=move || loader.with(|s| s.ready().is_some_and(Vec::is_empty))>
                    <p class="section-empty">{move || t(ctx.language(), "team.empty")}</p>
                </Show>

                <div class="team-list">
                    <For
                        each=move || loader.with(|s| s.ready().cloned().unwrap_or_default())
                        key=|member| member.id.clone()
                        children=move |member| {
                            let initials = member.initials();
                            view! {
                                <div class="team-member">
                                    {match member.image.clone() {
                                        Some(image) => view! {
                                            <img class="team-avatar" src=image alt=member.name.clone() />
                                        }
                                        .into_any(),
                                        None => view! {
                                            <div class="team-avatar team-avatar-initials">
                                                {initials}
                                            </div>
                                        }
                                        .into_any(),
                                    }}
                                    <div class="team-member-info">
                                        <h3 class="team-member-name">{member.name.clone()}</h3>
                                        {member
                                            .role
                                            .clone()
                                            .map(|role| view! { <p class="team-member-role">{role}</p> })}
                                        {member
                                            .quote
                                            .clone()
                                            .map(|quote| {
                                                view! {
                                                    <p class="team-member-quote">{format!("“{quote}”")}</p>
                                                }
                                            })}
                                        {member
                                            .bio
                                            .clone()
                                            .map(|bio| view! { <p class="team-member-bio">{bio}</p> })}
                                        {member
                                            .license_number
                                            .clone()
                                            .map(|license| {
                                                view! {
                                                    <p class="team-member-license">
                                                        {move || {
                                                            format!(
                                                                "{}: {license}",
                                                                t(ctx.language(), "team.license"),
                                                            )
                                                        }}
                                                    </p>
                                                }
                                            })}
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
