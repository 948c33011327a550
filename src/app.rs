//! Root application component with context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::SiteConfig;
use crate::net::oauth::GIS_SCRIPT_SRC;
use crate::pages::home::HomePage;
use crate::state::auth::{AUTH_STORAGE_KEY, AuthStore};
use crate::state::language::{self, LANGUAGE_STORAGE_KEY, Language, LanguageState, LanguageStore};
use crate::state::store::Store;
use crate::state::theme::{self, THEME_STORAGE_KEY, ThemeStore};
use crate::state::ui::{UI_STORAGE_KEY, UiStore};
use crate::util::storage::{BrowserStorage, StorageBackend};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=GIS_SCRIPT_SRC async defer></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Mirror `store` into a signal that components can track.
fn mirror<T>(store: &Store<T>) -> RwSignal<T>
where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let signal = RwSignal::new(store.get());
    store.subscribe(move |value: &T| signal.set(value.clone()));
    signal
}

/// Current language as a derived signal.
pub fn use_language() -> Signal<Language> {
    let state = expect_context::<RwSignal<LanguageState>>();
    Signal::derive(move || state.get().language)
}

/// Root application component.
///
/// Opens every store detached so the server and the first client render
/// agree, restores persisted values once mounted, and provides both the
/// stores (for writes) and their mirrored signals (for reads).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend: Arc<dyn StorageBackend> = Arc::new(BrowserStorage);
    let auth_store: AuthStore = Store::detached(AUTH_STORAGE_KEY, Arc::clone(&backend));
    let ui_store: UiStore = Store::detached(UI_STORAGE_KEY, Arc::clone(&backend));
    let language_store: LanguageStore = Store::detached(LANGUAGE_STORAGE_KEY, Arc::clone(&backend));
    let theme_store: ThemeStore = Store::detached(THEME_STORAGE_KEY, backend);

    let auth = mirror(&auth_store);
    let ui = mirror(&ui_store);
    let lang = mirror(&language_store);
    let theme_state = mirror(&theme_store);

    {
        let (auth_store, ui_store, language_store, theme_store) =
            (auth_store.clone(), ui_store.clone(), language_store.clone(), theme_store.clone());
        Effect::new(move || {
            auth_store.restore();
            ui_store.restore();
            language_store.restore();
            theme_store.restore();
        });
    }

    Effect::new(move || language::apply(lang.get().language));
    Effect::new(move || theme::apply(theme_state.get().theme));

    provide_context(SiteConfig::from_build_env());
    provide_context(auth_store);
    provide_context(ui_store);
    provide_context(language_store);
    provide_context(theme_store);
    provide_context(auth);
    provide_context(ui);
    provide_context(lang);
    provide_context(theme_state);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
