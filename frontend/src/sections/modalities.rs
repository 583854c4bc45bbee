use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;

#[function_component(Modalities)]
pub fn modalities(props: &ConfigProps) -> Html {
    let modalities = &props.config.content.modalities;

    html! {
        <section id="atendimento" class="page-section modalities">
            <div class="container">
                <SectionHeading title="Modalidades de Atendimento" subtitle={Some(AttrValue::from("Flexibilidade para você"))} />
                <div class="modalities-grid">
                    {
                        modalities.iter().enumerate().map(|(i, modality)| {
                            let from = if i % 2 == 0 { RevealFrom::Left } else { RevealFrom::Right };
                            html! {
                                <Reveal key={i} from={from} class={classes!("modality-card")}>
                                    <div class="modality-shade"></div>
                                    <img src={modality.image_url.clone()} alt={format!("Atendimento {}", modality.title)} loading="lazy" />
                                    <div class="modality-body">
                                        <div class="modality-title">
                                            <IconView icon={modality.icon} />
                                            <h3>{&modality.title}</h3>
                                        </div>
                                        <p>{&modality.description}</p>
                                    </div>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .modalities {
                    background: #ffffff;
                }

                .modalities-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .modality-card {
                    position: relative;
                    height: 24rem;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: var(--ane-100);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                }

                .modality-card.visible:hover {
                    transform: scale(1.02);
                }

                .modality-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(to top, rgba(59, 42, 36, 0.8), transparent);
                }

                .modality-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .modality-card:hover img {
                    transform: scale(1.1);
                }

                .modality-body {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    z-index: 2;
                    padding: 2rem;
                    color: #ffffff;
                }

                .modality-title {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }

                .modality-title h3 {
                    margin: 0;
                    font-family: var(--serif);
                    font-size: 1.5rem;
                }

                .modality-body p {
                    margin: 0;
                    font-size: 0.9rem;
                    color: #e5e5e5;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .modality-card:hover .modality-body p {
                    opacity: 1;
                    transform: translateY(0);
                }

                @media (max-width: 768px) {
                    .modalities-grid {
                        grid-template-columns: 1fr;
                    }

                    .modality-body p {
                        opacity: 1;
                        transform: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
