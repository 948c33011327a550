//! Project grid with a category filter.

use leptos::prelude::*;

use crate::app::use_language;
use crate::content::{self, ProjectCategory};
use crate::i18n::t;

#[component]
pub fn Projects() -> impl IntoView {
    let lang = use_language();
    let filter = RwSignal::new(ProjectCategory::All);

    let filters = ProjectCategory::FILTERS
        .iter()
        .map(|&category| {
            view! {
                <button
                    class="chip"
                    class:chip--active=move || filter.get() == category
                    on:click=move |_| filter.set(category)
                >
                    {move || category.label().get(lang.get())}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        content::projects_in(filter.get())
            .into_iter()
            .map(|project| {
                view! {
                    <article class="project-card">
                        <h3 class="project-card__title">{project.title}</h3>
                        <p class="project-card__body">{move || project.description.get(lang.get())}</p>
                        <ul class="tags">
                            {project.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
                        </ul>
                        <div class="project-card__links">
                            {project.url.map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer">
                                    {move || t(lang.get(), "projects.visit")}
                                </a>
                            })}
                            {project.github.map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer">
                                    {move || t(lang.get(), "projects.source")}
                                </a>
                            })}
                        </div>
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">{move || t(lang.get(), "projects.title")}</h2>
            <div class="projects__filters">{filters}</div>
            <div class="projects__grid">{cards}</div>
        </section>
    }
}
