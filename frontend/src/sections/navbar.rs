use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icon::IconView;
use crate::config::ConfigProps;
use crate::content::Icon;
use crate::dom::{open_external, scroll_to_anchor};
use crate::hooks::use_scroll;
use crate::state::scroll::navbar_compacted;

#[function_component(Navbar)]
pub fn navbar(props: &ConfigProps) -> Html {
    let config = &props.config;
    let menu_open = use_state(|| false);
    let compacted = use_scroll(navbar_compacted);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every in-page link scrolls itself and closes the overlay
    let follow = |target: String| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&target);
            menu_open.set(false);
        })
    };

    let schedule = {
        let menu_open = menu_open.clone();
        let link = config.whatsapp_link();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            open_external(&link);
        })
    };

    let links = |class: &'static str| -> Html {
        config
            .content
            .nav_links
            .iter()
            .map(|link| {
                html! {
                    <a key={link.target.clone()} href={link.target.clone()} class={class} onclick={follow(link.target.clone())}>
                        {&link.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", compacted.then_some("compacted"))}>
            <div class="container nav-content">
                <a href="#home" class="nav-logo" onclick={follow("#home".to_string())}>
                    {config.practice.full_name()}
                </a>

                <div class="nav-desktop">
                    {links("nav-link")}
                    <Button class={classes!("nav-cta")} onclick={schedule.clone()}>{"Agendar"}</Button>
                </div>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>

                <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                    {links("mobile-link")}
                    <Button onclick={schedule}>{"Agendar Consulta"}</Button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.compacted {
                    padding: 1rem 0;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                }

                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    position: relative;
                    z-index: 60;
                    font-family: var(--serif);
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--ane-500);
                    text-decoration: none;
                }

                .nav-desktop {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: var(--muted);
                    font-size: 0.9rem;
                    letter-spacing: 0.03em;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--ane-400);
                }

                .nav-cta {
                    padding: 0.5rem 1.5rem;
                    font-size: 0.9rem;
                }

                .burger-menu {
                    display: none;
                    position: relative;
                    z-index: 60;
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    color: var(--ink);
                    cursor: pointer;
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: #ffffff;
                    opacity: 0;
                    transform: translateX(100%);
                    pointer-events: none;
                    transition: transform 0.4s ease, opacity 0.4s ease;
                }

                .mobile-menu.open {
                    opacity: 1;
                    transform: translateX(0);
                    pointer-events: auto;
                }

                .mobile-link {
                    font-family: var(--serif);
                    font-size: 1.5rem;
                    color: var(--ink);
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
