//! Page footer with back-to-top and the discreet admin entry point.

use leptos::prelude::*;

use crate::app::use_language;
use crate::components::admin_modal::AdminModal;
use crate::content;
use crate::i18n::t;
use crate::state::auth::AuthState;
use crate::util::scroll;

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_language();
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin_open = RwSignal::new(false);
    let year = content::current_year();

    view! {
        <footer class="footer">
            <p class="footer__rights">
                {format!("© {year} Portfolio. ")}
                {move || t(lang.get(), "footer.rights")}
            </p>
            <div class="footer__actions">
                <button
                    class="footer__admin"
                    class:footer__admin--active=move || auth.get().is_authenticated
                    on:click=move |_| admin_open.set(true)
                    title=move || t(lang.get(), "admin.title")
                >
                    "⚙"
                </button>
                <button class="btn footer__top" on:click=move |_| scroll::scroll_to_top()>
                    {move || t(lang.get(), "footer.back_to_top")}
                </button>
            </div>
            <Show when=move || admin_open.get()>
                <AdminModal on_close=Callback::new(move |()| admin_open.set(false))/>
            </Show>
        </footer>
    }
}
