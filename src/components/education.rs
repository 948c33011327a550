//! Education list.

use leptos::prelude::*;

use crate::app::use_language;
use crate::content::EDUCATION;
use crate::i18n::t;

#[component]
pub fn EducationSection() -> impl IntoView {
    let lang = use_language();

    let items = EDUCATION
        .iter()
        .map(|entry| {
            view! {
                <li class="education__item" class:education__item--highlight=entry.highlight>
                    <h3 class="education__school">{entry.school}</h3>
                    <p class="education__degree">{move || entry.degree.get(lang.get())}</p>
                    <span class="education__period">{entry.period}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id="education" class="section education">
            <h2 class="section__title">{move || t(lang.get(), "education.title")}</h2>
            <ul class="education__list">{items}</ul>
        </section>
    }
}
