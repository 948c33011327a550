//! Admin sign-in dialog backed by the OAuth token popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog obtains an access token from the browser token client and hands
//! it to `state::admin::complete_admin_login`, which decides whether the
//! account is the configured admin. This component only reports outcomes.

#[cfg(test)]
#[path = "admin_modal_test.rs"]
mod admin_modal_test;

use leptos::prelude::*;

use crate::app::use_language;
use crate::config::SiteConfig;
use crate::i18n::{t, t_with};
use crate::net::oauth;
use crate::net::types::User;
use crate::state::admin::AdminLoginError;
use crate::state::auth::{AuthState, AuthStore};
use crate::state::contact::ADMIN_ERROR_DISMISS_MS;
use crate::state::language::Language;
use crate::util::timer::Debouncer;

/// Localized error line for a failed sign-in.
#[must_use]
pub fn login_error_message(language: Language, error: &AdminLoginError, allowed_email: &str) -> String {
    match error {
        AdminLoginError::AccessDenied { .. } => t_with(language, error.i18n_key(), &[("email", allowed_email)]),
        AdminLoginError::Lookup(_) | AdminLoginError::Provider => t(language, error.i18n_key()).to_owned(),
    }
}

/// Profile picture URL and alt text for the signed-in view, when the
/// provider supplied a picture.
#[must_use]
pub fn avatar_of(user: Option<&User>) -> Option<(String, String)> {
    user.and_then(|u| u.picture.clone().map(|src| (src, u.name.clone())))
}

/// Show `message` on the error line and clear it after
/// [`ADMIN_ERROR_DISMISS_MS`] unless a newer error replaces it first.
fn show_error(error: RwSignal<Option<String>>, dismiss: &Debouncer, message: String) {
    error.set(Some(message));
    dismiss.schedule(ADMIN_ERROR_DISMISS_MS, move || error.set(None));
}

#[component]
pub fn AdminModal(on_close: Callback<()>) -> impl IntoView {
    let lang = use_language();
    let config = expect_context::<SiteConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let auth_store = expect_context::<AuthStore>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let dismiss = Debouncer::new();

    let on_sign_in = {
        let auth_store = auth_store.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            let Some(client_id) = config.google_client_id.clone() else {
                show_error(error, &dismiss, t(lang.get_untracked(), "admin.unconfigured").to_owned());
                return;
            };
            busy.set(true);
            dismiss.cancel();
            error.set(None);

            let allowed = config.admin_email.clone();
            let userinfo_endpoint = config.userinfo_endpoint.clone();
            let auth_store = auth_store.clone();
            let dismiss = dismiss.clone();
            oauth::request_access_token(&client_id, move |result| match result {
                Ok(access_token) => {
                    #[cfg(feature = "hydrate")]
                    {
                        let allowed = allowed.clone();
                        let identity = crate::net::api::HttpIdentity::new(userinfo_endpoint.clone());
                        let auth_store = auth_store.clone();
                        let dismiss = dismiss.clone();
                        leptos::task::spawn_local(async move {
                            let outcome =
                                crate::state::admin::complete_admin_login(&identity, &access_token, &allowed, &auth_store)
                                    .await;
                            match outcome {
                                Ok(user) => {
                                    log::info!("admin signed in as {}", user.email);
                                    on_close.run(());
                                }
                                Err(e) => {
                                    log::warn!("{e}");
                                    show_error(error, &dismiss, login_error_message(lang.get_untracked(), &e, &allowed));
                                }
                            }
                            busy.set(false);
                        });
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = (access_token, &userinfo_endpoint, &auth_store);
                        busy.set(false);
                    }
                }
                Err(e) => {
                    log::warn!("{e}");
                    show_error(error, &dismiss, login_error_message(lang.get_untracked(), &e, &allowed));
                    busy.set(false);
                }
            });
        }
    };

    let on_sign_out = move |_| {
        auth_store.logout();
        on_close.run(());
    };
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let signed_in_as = move || {
        auth.get()
            .user
            .map_or_else(|| "—".to_owned(), |u| format!("{} <{}>", u.name, u.email))
    };
    let avatar = move || {
        auth.with(|a| avatar_of(a.user.as_ref()))
            .map(|(src, name)| view! { <img class="dialog__avatar" src=src alt=name referrerpolicy="no-referrer"/> })
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--admin"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{move || t(lang.get(), "admin.title")}</h2>

                <Show
                    when=move || auth.get().is_authenticated
                    fallback=move || {
                        view! {
                            <p class="dialog__hint">{move || t(lang.get(), "admin.restricted")}</p>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=on_sign_in.clone()
                            >
                                {move || {
                                    let key = if busy.get() { "admin.signing_in" } else { "admin.sign_in" };
                                    t(lang.get(), key)
                                }}
                            </button>
                        }
                    }
                >
                    {avatar}
                    <p class="dialog__profile-value">{signed_in_as}</p>
                    <button class="btn" on:click=on_sign_out.clone()>
                        {move || t(lang.get(), "admin.sign_out")}
                    </button>
                </Show>

                {move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })}

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close_click>"×"</button>
                </div>
            </div>
        </div>
    }
}
