//! Navbar Component
//!
//! Fixed navigation bar with a scrolled state past 50px, scroll-spy
//! over the home sections, a mobile slide-in menu, and cross-page
//! section navigation through the pending-scroll intent.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::LanguageSwitcher;
use crate::context::use_app_context;
use crate::i18n::t;
use crate::scroll::{scroll_to_id, scroll_window_top};

/// Scroll offset past which the bar gets its solid background
const SCROLLED_PAST_PX: f64 = 50.0;

/// Band below the viewport top used to decide the active section
const SPY_BAND_PX: f64 = 150.0;

const HOME_SECTIONS: [&str; 6] =
    ["home", "about", "portfolio", "services", "testimonials", "contact"];

fn on_home_page() -> bool {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| p == "/" || p.is_empty())
        .unwrap_or(false)
}

fn section_in_band(document: &web_sys::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            rect.top() <= SPY_BAND_PX && rect.bottom() >= SPY_BAND_PX
        })
        .unwrap_or(false)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (scrolled, set_scrolled) = signal(false);
    let (active_section, set_active_section) = signal("home");
    let (menu_open, set_menu_open) = signal(false);

    // Global scroll tracking for the bar state and the section spy
    {
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let Some(win) = web_sys::window() else { return };
            let offset = win.scroll_y().unwrap_or(0.0);
            set_scrolled.set(offset > SCROLLED_PAST_PX);

            if on_home_page() {
                if let Some(document) = win.document() {
                    if let Some(current) =
                        HOME_SECTIONS.into_iter().find(|id| section_in_band(&document, id))
                    {
                        set_active_section.set(current);
                    }
                }
            }
        });
        if let Some(win) = web_sys::window() {
            let _ =
                win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
        on_scroll.forget();
    }

    let nav_to_section = {
        let navigate = navigate.clone();
        move |id: &'static str| {
            set_menu_open.set(false);
            if on_home_page() {
                scroll_to_id(id);
                set_active_section.set(id);
            } else {
                // Cross-page: record the intent, consumed once on the home page
                ctx.request_section_scroll(id);
                navigate("/", Default::default());
            }
        }
    };

    let on_logo_click = {
        let navigate = navigate.clone();
        move |_| {
            set_menu_open.set(false);
            if on_home_page() {
                scroll_window_top();
                set_active_section.set("home");
            } else {
                navigate("/", Default::default());
            }
        }
    };

    let section_buttons = {
        let nav_to_section = nav_to_section.clone();
        move |item_class: &'static str| {
            let nav_to_section = nav_to_section.clone();
            HOME_SECTIONS
                .into_iter()
                .map(|id| {
                    let nav_to_section = nav_to_section.clone();
                    let is_active = move || active_section.get() == id;
                    view! {
                        <button
                            class=item_class
                            class:navbar-item-active=is_active
                            on:click=move |_| nav_to_section(id)
                        >
                            {move || t(ctx.language(), &format!("nav.{id}"))}
                        </button>
                    }
                })
                .collect_view()
        }
    };

    let page_link = {
        let navigate = navigate.clone();
        move |path: &'static str| {
            let navigate = navigate.clone();
            move |_| {
                set_menu_open.set(false);
                navigate(path, Default::default());
            }
        }
    };

    view! {
        <nav class="navbar" class:navbar-scrolled=move || scrolled.get()>
            <div class="navbar-container" dir="ltr">
                <div class="navbar-logo" on:click=on_logo_click>
                    <span class="logo-all">"ALL"</span>
                    <span class="logo-in">"IN"</span>
                </div>

                <div class="navbar-items">
                    {section_buttons.clone()("navbar-item")}
                    <button class="navbar-item" on:click=page_link("/team")>
                        {move || t(ctx.language(), "nav.team")}
                    </button>
                    <button class="navbar-item" on:click=page_link("/courses")>
                        {move || t(ctx.language(), "nav.courses")}
                    </button>
                </div>

                <div class="navbar-right">
                    <LanguageSwitcher />
                    <button
                        class="navbar-mobile-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        <span class="hamburger" class:hamburger-open=move || menu_open.get()>
                            "☰"
                        </span>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu-backdrop" on:click=move |_| set_menu_open.set(false) />
                <div class="mobile-menu">
                    {section_buttons.clone()("mobile-menu-item")}
                    <p class="mobile-menu-footer">{move || t(ctx.language(), "hero.tagline")}</p>
                </div>
            </Show>
        </nav>
    }
}
