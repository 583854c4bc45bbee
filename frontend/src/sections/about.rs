use yew::prelude::*;

use crate::components::count_up::CountUpNumber;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;

#[function_component(About)]
pub fn about(props: &ConfigProps) -> Html {
    let practice = &props.config.practice;
    let stats = &props.config.content.stats;

    html! {
        <section id="sobre" class="page-section about">
            <div class="container about-grid">
                <Reveal from={RevealFrom::Left} class={classes!("about-photo-wrap")}>
                    <div class="about-photo">
                        <img src={practice.about_image_url.clone()} alt={format!("{} trabalhando", practice.full_name())} loading="lazy" />
                    </div>
                    <div class="about-dots"></div>
                </Reveal>

                <div>
                    <SectionHeading title="Sobre a Profissional" subtitle={Some(AttrValue::from("Minha Jornada"))} centered={false} />
                    <div class="about-bio">
                        {
                            practice.bio.iter().enumerate().map(|(i, paragraph)| html! {
                                <Reveal key={i} delay_ms={200 + 100 * i as u32}>
                                    <p>{paragraph}</p>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="about-stats">
                        {
                            stats.iter().enumerate().map(|(i, stat)| html! {
                                <Reveal key={i} from={RevealFrom::Scale} delay_ms={400 + 100 * i as u32} class={classes!("about-stat")}>
                                    <CountUpNumber target={stat.value} suffix={stat.suffix.clone()} />
                                    <span class="about-stat-label">{&stat.label}</span>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    position: relative;
                    overflow: hidden;
                    background: #ffffff;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-photo-wrap {
                    position: relative;
                }

                .about-photo {
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border-radius: 0 5rem 0 5rem;
                    background: #e5e5e5;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                }

                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.9;
                    transition: opacity 0.5s ease;
                }

                .about-photo img:hover {
                    opacity: 1;
                }

                .about-dots {
                    position: absolute;
                    right: -2.5rem;
                    bottom: -2.5rem;
                    width: 8rem;
                    height: 8rem;
                    opacity: 0.5;
                    background-image: radial-gradient(var(--ane-200) 2px, transparent 2px);
                    background-size: 16px 16px;
                }

                .about-bio p {
                    margin: 0 0 1.5rem;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.75;
                    color: var(--muted);
                }

                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .about-stat {
                    padding: 1.5rem;
                    border: 1px solid var(--ane-100);
                    border-radius: 1rem;
                    background: var(--ane-50);
                    text-align: center;
                }

                .about-stat .count-up {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-family: var(--serif);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--ane-400);
                }

                .about-stat-label {
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: var(--muted);
                }

                @media (max-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
