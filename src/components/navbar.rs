//! Fixed top navigation with section links and preference toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only writer of `UiState`: link clicks set the active
//! section and close the mobile menu, and a debounced scroll listener keeps
//! the highlighted link in sync with what is on screen.

use leptos::prelude::*;

use crate::app::use_language;
use crate::i18n::t;
use crate::state::language::LanguageStore;
use crate::state::theme::{self, ThemeState, ThemeStore};
use crate::state::ui::{UiState, UiStore};
use crate::util::scroll;

/// Section anchors in page order, with their link label keys.
pub const SECTION_IDS: [(&str, &str); 7] = [
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("experience", "nav.experience"),
    ("education", "nav.education"),
    ("skills", "nav.skills"),
    ("projects", "nav.projects"),
    ("contact", "nav.contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme_state = expect_context::<RwSignal<ThemeState>>();
    let ui_store = expect_context::<UiStore>();
    let language_store = expect_context::<LanguageStore>();
    let theme_store = expect_context::<ThemeStore>();
    let lang = use_language();
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let tracker = crate::util::timer::Debouncer::new();
        let ui_store = ui_store.clone();
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(scroll::is_scrolled(scroll::scroll_y()));
            let ui_store = ui_store.clone();
            tracker.schedule(scroll::SCROLL_DEBOUNCE_MS, move || {
                let ids: Vec<&str> = SECTION_IDS.iter().map(|(id, _)| *id).collect();
                if let Some(id) = scroll::active_section(&scroll::section_tops(&ids)) {
                    ui_store.set_active_section(id);
                }
            });
        });
    }

    let go_to = {
        let ui_store = ui_store.clone();
        move |id: &'static str| {
            scroll::scroll_to_element(id);
            ui_store.set_active_section(id);
            ui_store.close_menu();
        }
    };

    let links = SECTION_IDS
        .iter()
        .map(|&(id, key)| {
            let go_to = go_to.clone();
            view! {
                <li>
                    <button
                        class="navbar__link"
                        class:navbar__link--active=move || ui.get().active_section == id
                        on:click=move |_| go_to(id)
                    >
                        {move || t(lang.get(), key)}
                    </button>
                </li>
            }
        })
        .collect_view();

    let on_toggle_menu = {
        let ui_store = ui_store.clone();
        move |_| ui_store.toggle_menu()
    };
    let on_toggle_language = move |_| language_store.toggle_language();
    let on_toggle_theme = move |_| {
        let next = theme_state.get().theme.toggled(theme::system_prefers_dark());
        theme_store.set_theme(next);
    };

    view! {
        <header class="navbar" class:navbar--scrolled=move || scrolled.get()>
            <button class="navbar__brand" on:click=move |_| go_to("home")>
                "Portfolio"
            </button>

            <nav class="navbar__nav" class:navbar__nav--open=move || ui.get().is_menu_open>
                <ul class="navbar__links">{links}</ul>
            </nav>

            <div class="navbar__actions">
                <button
                    class="btn navbar__lang"
                    on:click=on_toggle_language
                    title=move || t(lang.get(), "nav.switch_language")
                >
                    {move || lang.get().other().code().to_uppercase()}
                </button>
                <button class="btn navbar__theme" on:click=on_toggle_theme title="Toggle theme">
                    {move || if theme_state.get().theme.resolve(theme::system_prefers_dark()) == "dark" { "☀" } else { "☾" }}
                </button>
                <button
                    class="btn navbar__menu"
                    on:click=on_toggle_menu
                    aria-expanded=move || ui.get().is_menu_open.to_string()
                    title=move || t(lang.get(), "nav.menu")
                >
                    {move || if ui.get().is_menu_open { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}
