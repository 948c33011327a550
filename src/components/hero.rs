//! Landing section with name, role and call to action.

use leptos::prelude::*;

use crate::app::use_language;
use crate::i18n::t;
use crate::util::scroll;

#[component]
pub fn Hero() -> impl IntoView {
    let lang = use_language();

    view! {
        <section id="home" class="section hero">
            <p class="hero__greeting">{move || t(lang.get(), "hero.greeting")}</p>
            <h1 class="hero__name">{move || t(lang.get(), "hero.name")}</h1>
            <h2 class="hero__title">{move || t(lang.get(), "hero.title")}</h2>
            <p class="hero__subtitle">{move || t(lang.get(), "hero.subtitle")}</p>
            <p class="hero__location">{move || t(lang.get(), "hero.location")}</p>
            <button class="btn btn--primary hero__cta" on:click=move |_| scroll::scroll_to_element("contact")>
                {move || t(lang.get(), "hero.cta")}
            </button>
        </section>
    }
}
