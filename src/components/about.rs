//! About section with headline figures.

use leptos::prelude::*;

use crate::app::use_language;
use crate::content::{self, PROJECTS};
use crate::i18n::t;

/// First year of professional work; the experience figure counts from here.
const CAREER_START_YEAR: u32 = 2015;

#[component]
pub fn About() -> impl IntoView {
    let lang = use_language();
    let years = content::years_since(CAREER_START_YEAR, content::current_year());

    view! {
        <section id="about" class="section about">
            <h2 class="section__title">{move || t(lang.get(), "about.title")}</h2>
            <p class="about__intro">{move || t(lang.get(), "about.intro")}</p>
            <div class="about__stats">
                <div class="about__stat">
                    <span class="about__stat-value">{format!("{years}+")}</span>
                    <span class="about__stat-label">{move || t(lang.get(), "about.years")}</span>
                </div>
                <div class="about__stat">
                    <span class="about__stat-value">{PROJECTS.len()}</span>
                    <span class="about__stat-label">{move || t(lang.get(), "about.projects")}</span>
                </div>
            </div>
        </section>
    }
}
