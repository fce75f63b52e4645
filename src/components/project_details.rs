//! Project Details Component
//!
//! Detail panel for the active project plus a full-screen gallery
//! modal. Gallery state resets whenever a different project becomes
//! active; body scrolling is locked while the modal is open.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::i18n::t;
use crate::models::{Project, ProjectType, TextField};
use crate::scroll::set_body_scroll_locked;

#[component]
pub fn ProjectDetails(#[prop(into)] project: Signal<Option<Project>>) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (gallery_open, set_gallery_open) = signal(false);
    let (image_index, set_image_index) = signal(0usize);

    let images = Memo::new(move |_| {
        project.with(|p| p.as_ref().map(Project::gallery_images).unwrap_or_default())
    });

    // New selection: back to the first image, modal closed
    Effect::new(move |_| {
        let _ = project.with(|p| p.as_ref().map(|p| p.id.clone()));
        set_image_index.set(0);
        if gallery_open.get_untracked() {
            set_gallery_open.set(false);
            set_body_scroll_locked(false);
        }
    });

    let open_gallery = move |index: usize| {
        set_image_index.set(index);
        set_gallery_open.set(true);
        set_body_scroll_locked(true);
    };
    let close_gallery = move || {
        set_gallery_open.set(false);
        set_body_scroll_locked(false);
    };

    let step_image = move |delta: isize| {
        let count = images.with(Vec::len);
        if count == 0 {
            return;
        }
        set_image_index.update(|i| {
            *i = (*i as isize + delta).rem_euclid(count as isize) as usize;
        });
    };

    let text = move |field: TextField| {
        project.with(|p| {
            p.as_ref().and_then(|p| p.text(field, ctx.language()).map(String::from))
        })
    };

    let title = move || {
        text(TextField::Title)
            .unwrap_or_else(|| t(ctx.language(), "projectDetails.untitledProperty"))
    };
    let location = move || {
        text(TextField::Location)
            .unwrap_or_else(|| t(ctx.language(), "projectDetails.locationNotSpecified"))
    };
    let type_label = move || {
        let key = match project.with(|p| p.as_ref().map(|p| p.project_type)) {
            Some(ProjectType::ForSale) => "projectDetails.forSale",
            Some(ProjectType::ForRent) => "projectDetails.forRent",
            _ => "projectDetails.sold",
        };
        t(ctx.language(), key)
    };
    let features = move || {
        project.with(|p| {
            p.as_ref().map(|p| p.feature_list(ctx.language()).to_vec()).unwrap_or_default()
        })
    };

    let contact_about_property = move |_| {
        ctx.request_section_scroll("contact");
        navigate("/", Default::default());
    };

    view! {
        <Show
            when=move || project.with(Option::is_some)
            fallback=move || {
                view! {
                    <div class="project-details-empty">
                        <p>{move || t(ctx.language(), "projectDetails.selectProperty")}</p>
                    </div>
                }
            }
        >
            <div class="project-details">
                <div class="project-details-hero-image" on:click=move |_| open_gallery(0)>
                    <img
                        src=move || images.with(|imgs| imgs.first().cloned().unwrap_or_default())
                        alt=title
                    />
                    <Show when=move || images.with(|imgs| imgs.len() > 1)>
                        <div class="image-gallery-badge">
                            {move || {
                                format!(
                                    "+{} {}",
                                    images.with(|imgs| imgs.len().saturating_sub(1)),
                                    t(ctx.language(), "projectDetails.moreImages"),
                                )
                            }}
                        </div>
                    </Show>
                </div>

                <div class="project-details-info">
                    <div class="details-main">
                        {move || {
                            project.with(|p| {
                                p.as_ref()
                                    .and_then(|p| p.badge.clone())
                                    .map(|b| {
                                        view! {
                                            <span class="details-badge">{b.to_uppercase()}</span>
                                        }
                                    })
                            })
                        }}
                        <h2 class="details-title">{title}</h2>
                        <p class="details-location">{location}</p>

                        {move || {
                            project.with(|p| {
                                p.as_ref()
                                    .and_then(Project::price_label)
                                    .map(|price| {
                                        view! { <p class="details-price">{price}</p> }
                                    })
                            })
                        }}

                        <div class="details-specs">
                            {move || {
                                project.with(|p| {
                                    let Some(p) = p.as_ref() else { return Vec::new() };
                                    let lang = ctx.language();
                                    let mut chips = Vec::new();
                                    if p.bedrooms > 0 {
                                        chips.push(format!(
                                            "{} {}", p.bedrooms, t(lang, "projectDetails.beds"),
                                        ));
                                    }
                                    if p.bathrooms > 0 {
                                        chips.push(format!(
                                            "{} {}", p.bathrooms, t(lang, "projectDetails.baths"),
                                        ));
                                    }
                                    if p.area > 0.0 {
                                        chips.push(format!(
                                            "{} {}",
                                            p.area,
                                            p.area_unit.as_deref().unwrap_or("sqm"),
                                        ));
                                    }
                                    chips
                                })
                                .into_iter()
                                .map(|chip| view! { <span class="spec-chip">{chip}</span> })
                                .collect_view()
                            }}
                        </div>

                        <span class="type-badge">{type_label}</span>

                        {move || {
                            text(TextField::ShortDesc)
                                .map(|desc| view! { <p class="details-short-desc">{desc}</p> })
                        }}

                        <button class="btn-primary contact-btn-full" on:click=contact_about_property.clone()>
                            {move || t(ctx.language(), "projectDetails.contact")}
                        </button>
                    </div>

                    <div class="details-side">
                        {move || {
                            text(TextField::FullDesc)
                                .map(|desc| view! { <p class="details-full-desc">{desc}</p> })
                        }}

                        <Show when=move || !features().is_empty()>
                            <div class="details-features">
                                <h3 class="details-section-title">
                                    {move || t(ctx.language(), "projectDetails.features")}
                                </h3>
                                <ul class="features-list">
                                    {move || {
                                        features()
                                            .into_iter()
                                            .map(|feature| {
                                                view! { <li class="feature-item">{feature}</li> }
                                            })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>

            <Show when=move || gallery_open.get()>
                <div class="gallery-modal" on:click=move |_| close_gallery()>
                    <div class="gallery-modal-content" on:click=|ev| ev.stop_propagation()>
                        <button class="gallery-close-btn" on:click=move |_| close_gallery()>
                            "✕"
                        </button>
                        <div class="gallery-modal-main">
                            <button class="gallery-arrow" on:click=move |_| step_image(-1)>
                                "‹"
                            </button>
                            <img
                                class="gallery-modal-image"
                                src=move || {
                                    images.with(|imgs| {
                                        imgs.get(image_index.get()).cloned().unwrap_or_default()
                                    })
                                }
                                alt=title
                            />
                            <button class="gallery-arrow" on:click=move |_| step_image(1)>
                                "›"
                            </button>
                        </div>
                        <Show when=move || images.with(|imgs| imgs.len() > 1)>
                            <div class="gallery-modal-thumbnails">
                                {move || {
                                    images
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, image)| {
                                            let is_active = move || image_index.get() == index;
                                            view! {
                                                <img
                                                    class="modal-thumbnail"
                                                    class:active=is_active
                                                    src=image
                                                    on:click=move |_| set_image_index.set(index)
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
