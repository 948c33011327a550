//! Single-page portfolio: every section stacked in navigation order.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page">
            <Hero/>
            <About/>
            <ExperienceSection/>
            <EducationSection/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
    }
}
