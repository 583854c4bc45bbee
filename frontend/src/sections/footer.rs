use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::IconView;
use crate::config::ConfigProps;
use crate::content::Icon;
use crate::dom::scroll_to_anchor;

#[function_component(Footer)]
pub fn footer(props: &ConfigProps) -> Html {
    let config = &props.config;
    let practice = &config.practice;
    let contact = &config.contact;
    let year = Local::now().year();

    let follow = |target: &str| {
        let target = target.to_string();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&target);
        })
    };

    let social = |url: &Option<String>, icon: Icon, label: &'static str| -> Html {
        match url {
            Some(url) => html! {
                <a class="footer-social" href={url.clone()} target="_blank" rel="noopener noreferrer" aria-label={label}>
                    <IconView icon={icon} />
                </a>
            },
            None => html! {},
        }
    };

    html! {
        <footer id="contato" class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-name">{practice.full_name()}</h3>
                        <p class="footer-blurb">
                            {format!("{} - {}", practice.title, practice.registration)}<br/>
                            {&practice.footer_blurb}
                        </p>
                        <div class="footer-socials">
                            {social(&contact.instagram_url, Icon::Instagram, "Instagram")}
                            {social(&contact.linkedin_url, Icon::Linkedin, "LinkedIn")}
                        </div>
                    </div>

                    <div>
                        <h4>{"Contato"}</h4>
                        <ul class="footer-list">
                            <li>
                                <a href={config.whatsapp_link()} target="_blank" rel="noopener noreferrer">
                                    <IconView icon={Icon::MessageCircle} class={classes!("footer-icon")} />
                                    {&contact.phone_display}
                                </a>
                            </li>
                            <li>
                                <a href={format!("mailto:{}", contact.email)}>
                                    <IconView icon={Icon::Mail} class={classes!("footer-icon")} />
                                    {&contact.email}
                                </a>
                            </li>
                            <li>
                                <IconView icon={Icon::MapPin} class={classes!("footer-icon")} />
                                <span>
                                    {
                                        for contact.address_lines.iter().enumerate().map(|(i, line)| html! {
                                            <>
                                                { if i > 0 { html! { <br/> } } else { html! {} } }
                                                {line}
                                            </>
                                        })
                                    }
                                </span>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Links Rápidos"}</h4>
                        <ul class="footer-list">
                            <li><a href="#sobre" onclick={follow("#sobre")}>{"Sobre Mim"}</a></li>
                            <li><a href="#especialidades" onclick={follow("#especialidades")}>{"Especialidades"}</a></li>
                            <li><a href="#atendimento" onclick={follow("#atendimento")}>{"Modalidades"}</a></li>
                            <li><a href="#home" onclick={follow("#home")}>{"Voltar ao topo"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. Todos os direitos reservados.", year, practice.full_name())}</p>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    padding: 5rem 0 2.5rem;
                    border-top: 1px solid #f3f4f6;
                    background: #ffffff;
                    scroll-margin-top: 80px;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    margin-bottom: 4rem;
                }

                .footer-name {
                    margin: 0 0 1.5rem;
                    font-family: var(--serif);
                    font-size: 1.5rem;
                    color: var(--ane-500);
                }

                .footer-blurb {
                    margin: 0 0 1.5rem;
                    line-height: 1.7;
                    color: var(--muted);
                }

                .footer-socials {
                    display: flex;
                    gap: 1rem;
                }

                .footer-social {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--ane-50);
                    color: var(--ane-400);
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .footer-social:hover {
                    background: var(--ane-400);
                    color: #ffffff;
                }

                .footer h4 {
                    margin: 0 0 1.5rem;
                    color: var(--ink);
                }

                .footer-list {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }

                .footer-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: var(--muted);
                }

                .footer-list a {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-list a:hover {
                    color: var(--ane-400);
                }

                .footer-icon {
                    color: var(--ane-300);
                }

                .footer-bottom {
                    padding-top: 2rem;
                    border-top: 1px solid #f3f4f6;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
