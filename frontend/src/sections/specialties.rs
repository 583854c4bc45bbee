use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;

const STAGGER_MS: u32 = 200;

#[function_component(Specialties)]
pub fn specialties(props: &ConfigProps) -> Html {
    let content = &props.config.content;

    html! {
        <section id="especialidades" class="page-section specialties">
            <div class="container">
                <SectionHeading title="Especialidades e Formação" subtitle={Some(AttrValue::from("Como posso ajudar"))} />

                <div class="specialties-grid">
                    {
                        content.specialties.iter().enumerate().map(|(i, item)| html! {
                            <Reveal key={i} delay_ms={STAGGER_MS * i as u32} class={classes!("specialty-card")}>
                                <div class="specialty-icon"><IconView icon={item.icon} /></div>
                                <h3>{&item.title}</h3>
                                <p>{&item.description}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>

                {
                    if content.formation.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <Reveal class={classes!("formation")}>
                                <p>
                                    <span class="formation-label">{"Formação:"}</span>
                                    {" "}{content.formation.join(" • ")}
                                </p>
                            </Reveal>
                        }
                    }
                }
            </div>
            <style>
                {r#"
                .specialties {
                    background: rgba(251, 247, 244, 0.5);
                }

                .specialties-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .specialty-card {
                    padding: 2rem;
                    border: 1px solid transparent;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                }

                .specialty-card.visible:hover {
                    transform: translateY(-10px);
                    border-color: var(--ane-100);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }

                .specialty-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    margin-bottom: 1.5rem;
                    border-radius: 1rem;
                    background: var(--ane-100);
                    color: var(--ane-500);
                    font-size: 1.5rem;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .specialty-card:hover .specialty-icon {
                    background: var(--ane-400);
                    color: #ffffff;
                }

                .specialty-card h3 {
                    margin: 0 0 0.75rem;
                    font-family: var(--serif);
                    font-size: 1.25rem;
                }

                .specialty-card p {
                    margin: 0;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: var(--muted);
                }

                .formation {
                    max-width: 42rem;
                    margin: 4rem auto 0;
                    text-align: center;
                }

                .formation p {
                    display: inline-block;
                    margin: 0;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid var(--ane-100);
                    border-radius: 999px;
                    background: #ffffff;
                    font-size: 0.9rem;
                    color: var(--muted);
                }

                .formation-label {
                    font-weight: 700;
                    color: var(--ane-400);
                }

                @media (max-width: 1024px) {
                    .specialties-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 640px) {
                    .specialties-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
