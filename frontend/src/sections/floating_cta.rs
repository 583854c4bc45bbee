use yew::prelude::*;

use crate::components::icon::IconView;
use crate::config::ConfigProps;
use crate::content::Icon;
use crate::hooks::use_scroll;
use crate::state::scroll::floating_cta_visible;

/// WhatsApp shortcut pinned to the corner once the hero is behind us.
#[function_component(FloatingCta)]
pub fn floating_cta(props: &ConfigProps) -> Html {
    let visible = use_scroll(floating_cta_visible);

    html! {
        <a
            class={classes!("floating-cta", visible.then_some("visible"))}
            href={props.config.whatsapp_link()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Conversar pelo WhatsApp"
            aria-hidden={(!visible).to_string()}
            tabindex={if visible { "0" } else { "-1" }}
        >
            <IconView icon={Icon::MessageCircle} />
            <style>
                {r#"
                .floating-cta {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 45;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #25d366;
                    color: #ffffff;
                    font-size: 1.5rem;
                    text-decoration: none;
                    box-shadow: 0 10px 25px rgba(37, 211, 102, 0.4);
                    opacity: 0;
                    transform: scale(0.6) translateY(20px);
                    pointer-events: none;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .floating-cta.visible {
                    opacity: 1;
                    transform: scale(1) translateY(0);
                    pointer-events: auto;
                }

                .floating-cta.visible:hover {
                    transform: scale(1.1);
                }
                "#}
            </style>
        </a>
    }
}
