use yew::prelude::*;

use crate::config::{Preset, Section, SiteConfig};
use crate::sections::{
    about::About, cta::Cta, faq::Faq, floating_cta::FloatingCta, footer::Footer,
    gallery::Gallery, hero::Hero, location::Location, modalities::Modalities, navbar::Navbar,
    pinned::PinnedSection, quotes::Quotes, specialties::Specialties, testimonials::Testimonials,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub preset: Preset,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = use_memo(|preset| SiteConfig::load(*preset), props.preset);

    let render = |section: &Section| -> Html {
        let config = config.clone();
        match section {
            Section::Hero => html! { <Hero config={config} /> },
            Section::About => html! { <About config={config} /> },
            Section::Specialties => html! { <Specialties config={config} /> },
            Section::Pinned => html! { <PinnedSection config={config} /> },
            Section::Modalities => html! { <Modalities config={config} /> },
            Section::Location => html! { <Location config={config} /> },
            Section::Gallery => html! { <Gallery config={config} /> },
            Section::Quotes => html! { <Quotes config={config} /> },
            Section::Testimonials => html! { <Testimonials config={config} /> },
            Section::Faq => html! { <Faq config={config} /> },
            Section::Cta => html! { <Cta config={config} /> },
            Section::Footer => html! { <Footer config={config} /> },
            Section::FloatingCta => html! { <FloatingCta config={config} /> },
        }
    };

    html! {
        <div class="landing-page">
            <Navbar config={config.clone()} />
            <main>
                { for config.sections.iter().map(render) }
            </main>
        </div>
    }
}
