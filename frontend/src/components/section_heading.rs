use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!("section-heading", if props.centered { "centered" } else { "left" })}>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <Reveal>
                            <span class="section-eyebrow">{subtitle.clone()}</span>
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
            <Reveal delay_ms={100}>
                <h2 class="section-title">{props.title.clone()}</h2>
            </Reveal>
        </div>
    }
}
