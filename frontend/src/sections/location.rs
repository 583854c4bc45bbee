use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;
use crate::content::Icon;

#[function_component(Location)]
pub fn location(props: &ConfigProps) -> Html {
    let config = &props.config;
    let contact = &config.contact;

    html! {
        <section id="localizacao" class="page-section location">
            <div class="container">
                <SectionHeading title="Como Chegar" subtitle={Some(AttrValue::from("Localização"))} />
                <div class="location-grid">
                    <Reveal from={RevealFrom::Left} class={classes!("location-details")}>
                        <div class="location-row">
                            <IconView icon={Icon::MapPin} class={classes!("location-icon")} />
                            <div>
                                <h3>{"Endereço"}</h3>
                                { for contact.address_lines.iter().map(|line| html! { <p>{line}</p> }) }
                            </div>
                        </div>
                        {
                            if let Some(hours) = &contact.opening_hours {
                                html! {
                                    <div class="location-row">
                                        <IconView icon={Icon::Clock} class={classes!("location-icon")} />
                                        <div>
                                            <h3>{"Horário de Atendimento"}</h3>
                                            <p>{hours}</p>
                                        </div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <a class="location-link" href={config.map_link()} target="_blank" rel="noopener noreferrer">
                            {"Abrir no Google Maps"}<IconView icon={Icon::ArrowRight} />
                        </a>
                    </Reveal>
                    <Reveal from={RevealFrom::Right} class={classes!("location-map")}>
                        <iframe
                            title={format!("Mapa: {}", contact.map_query)}
                            src={config.map_embed_url()}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                    </Reveal>
                </div>
            </div>
            <style>
                {r#"
                .location {
                    background: var(--ane-50);
                }

                .location-grid {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 3rem;
                    align-items: stretch;
                }

                .location-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                }

                .location-row {
                    display: flex;
                    gap: 1rem;
                }

                .location-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--ane-100);
                }

                .location-row h3 {
                    margin: 0 0 0.5rem;
                    font-family: var(--serif);
                    font-size: 1.1rem;
                }

                .location-row p {
                    margin: 0;
                    line-height: 1.6;
                    color: var(--muted);
                }

                .location-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: auto;
                    font-weight: 500;
                    color: var(--ane-500);
                    text-decoration: none;
                }

                .location-map {
                    min-height: 24rem;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                }

                .location-map iframe {
                    width: 100%;
                    height: 100%;
                    min-height: 24rem;
                    border: 0;
                }

                @media (max-width: 768px) {
                    .location-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
