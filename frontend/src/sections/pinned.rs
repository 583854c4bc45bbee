use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::config::ConfigProps;

/// Full-width band with a fixed background the page scrolls over.
#[function_component(PinnedSection)]
pub fn pinned_section(props: &ConfigProps) -> Html {
    let Some(pinned) = &props.config.content.pinned else {
        return html! {};
    };

    html! {
        <section class="pinned" style={format!("background-image: url('{}');", pinned.image_url)}>
            <div class="pinned-overlay"></div>
            <div class="container pinned-content">
                <Reveal>
                    <h2>{&pinned.heading}</h2>
                </Reveal>
                <Reveal from={RevealFrom::Fade} delay_ms={200}>
                    <p>{&pinned.text}</p>
                </Reveal>
            </div>
            <style>
                {r#"
                .pinned {
                    position: relative;
                    display: flex;
                    align-items: center;
                    min-height: 70vh;
                    background-size: cover;
                    background-position: center;
                    background-attachment: fixed;
                    color: #ffffff;
                }

                .pinned-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(59, 42, 36, 0.85), rgba(59, 42, 36, 0.35));
                }

                .pinned-content {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                }

                .pinned-content h2 {
                    margin: 0 0 1.5rem;
                    font-family: var(--serif);
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 400;
                }

                .pinned-content p {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.8;
                }

                @media (max-width: 768px) {
                    .pinned {
                        background-attachment: scroll;
                    }
                }
                "#}
            </style>
        </section>
    }
}
