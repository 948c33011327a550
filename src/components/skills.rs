//! Skill categories with proficiency bars.

use leptos::prelude::*;

use crate::app::use_language;
use crate::content::SKILL_CATEGORIES;
use crate::i18n::t;

#[component]
pub fn Skills() -> impl IntoView {
    let lang = use_language();

    let categories = SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let skills = category
                .skills
                .iter()
                .map(|skill| {
                    let width = format!("width: {}%", skill.percent());
                    view! {
                        <li class="skill">
                            <div class="skill__label">
                                <span>{skill.name}</span>
                                <span>{format!("{}%", skill.percent())}</span>
                            </div>
                            <div class="skill__bar">
                                <div class="skill__fill" style=width></div>
                            </div>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="skills__category" id=category.id>
                    <h3>{move || category.title.get(lang.get())}</h3>
                    <ul class="skills__list">{skills}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title">{move || t(lang.get(), "skills.title")}</h2>
            <div class="skills__grid">{categories}</div>
        </section>
    }
}
