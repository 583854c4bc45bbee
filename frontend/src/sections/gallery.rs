use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;

#[function_component(Gallery)]
pub fn gallery(props: &ConfigProps) -> Html {
    let images = &props.config.content.gallery;

    html! {
        <section class="page-section gallery">
            <div class="container">
                <SectionHeading title="Conheça o Espaço" subtitle={Some(AttrValue::from("Ambiente Seguro e Acolhedor"))} />
                <div class="gallery-grid">
                    {
                        images.iter().enumerate().map(|(i, image)| html! {
                            <Reveal
                                key={i}
                                from={RevealFrom::Scale}
                                delay_ms={100 * i as u32}
                                class={classes!("gallery-item", (i == 0).then_some("gallery-feature"))}
                            >
                                <div class="gallery-tint"></div>
                                <img src={image.url.clone()} alt={image.alt.clone()} loading="lazy" />
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .gallery {
                    background: var(--ane-50);
                }

                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    grid-auto-rows: 12rem;
                    gap: 1rem;
                }

                .gallery-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
                    cursor: pointer;
                }

                .gallery-feature {
                    grid-column: span 2;
                    grid-row: span 2;
                }

                .gallery-tint {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: rgba(59, 42, 36, 0);
                    transition: background 0.3s ease;
                }

                .gallery-item:hover .gallery-tint {
                    background: rgba(59, 42, 36, 0.2);
                }

                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .gallery-item:hover img {
                    transform: scale(1.1);
                }

                @media (max-width: 768px) {
                    .gallery-grid {
                        grid-template-columns: 1fr;
                        grid-auto-rows: 16rem;
                    }

                    .gallery-feature {
                        grid-column: auto;
                        grid-row: auto;
                    }
                }
                "#}
            </style>
        </section>
    }
}
