//! Work history timeline.

use leptos::prelude::*;

use crate::app::use_language;
use crate::content::{EXPERIENCE, Experience};
use crate::i18n::t;
use crate::state::language::Language;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let lang = use_language();

    view! {
        <section id="experience" class="section experience">
            <h2 class="section__title">{move || t(lang.get(), "experience.title")}</h2>
            <ol class="timeline">
                {EXPERIENCE.iter().map(|job| view! { <ExperienceItem job=job lang=lang/> }).collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn ExperienceItem(job: &'static Experience, lang: Signal<Language>) -> impl IntoView {
    view! {
        <li class="timeline__item" class:timeline__item--current=job.is_current>
            <div class="timeline__header">
                <h3 class="timeline__title">{move || job.title.get(lang.get())}</h3>
                <Show when=move || job.is_current>
                    <span class="badge">{move || t(lang.get(), "experience.current")}</span>
                </Show>
            </div>
            <p class="timeline__meta">
                {job.company} " · " {move || job.period.get(lang.get())} " · " {job.location}
            </p>
            <p class="timeline__body">{move || job.description.get(lang.get())}</p>
            <ul class="tags">
                {job.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
            </ul>
        </li>
    }
}
