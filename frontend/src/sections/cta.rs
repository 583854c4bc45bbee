use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::IconView;
use crate::components::reveal::Reveal;
use crate::config::ConfigProps;
use crate::content::Icon;
use crate::dom::open_external;

#[function_component(Cta)]
pub fn cta(props: &ConfigProps) -> Html {
    let schedule = {
        let link = props.config.whatsapp_link();
        Callback::from(move |_: MouseEvent| open_external(&link))
    };

    html! {
        <section id="agendar" class="cta">
            <div class="cta-card">
                <div class="cta-glow cta-glow-top"></div>
                <div class="cta-glow cta-glow-bottom"></div>
                <Reveal class={classes!("cta-content")}>
                    <h2>
                        {"Caso queira conhecer um pouco mais sobre meu trabalho, "}
                        <br class="cta-break" />
                        {"vamos agendar uma conversa?"}
                    </h2>
                    <Button variant={ButtonVariant::White} class={classes!("cta-button")} onclick={schedule}>
                        <IconView icon={Icon::MessageCircle} />{"Agendar pelo WhatsApp"}
                    </Button>
                </Reveal>
            </div>
            <style>
                {r#"
                .cta {
                    padding: 5rem 1.5rem;
                }

                .cta-card {
                    position: relative;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 6rem 3rem;
                    overflow: hidden;
                    border-radius: 3rem;
                    background: var(--ane-900);
                    text-align: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .cta-glow {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    filter: blur(80px);
                }

                .cta-glow-top {
                    top: 0;
                    right: 0;
                    background: var(--ane-500);
                    opacity: 0.4;
                }

                .cta-glow-bottom {
                    bottom: 0;
                    left: 0;
                    background: var(--ane-300);
                    opacity: 0.3;
                }

                .cta-content {
                    position: relative;
                    z-index: 1;
                }

                .cta-content h2 {
                    margin: 0 0 2rem;
                    font-family: var(--serif);
                    font-size: clamp(1.8rem, 4vw, 3rem);
                    font-weight: 400;
                    line-height: 1.25;
                    color: #ffffff;
                }

                .cta-button {
                    padding: 1rem 2.5rem;
                    font-size: 1.1rem;
                    animation: ctaPulse 2s ease-in-out infinite;
                }

                .cta-button:hover {
                    animation: none;
                }

                @keyframes ctaPulse {
                    50% { opacity: 0.75; }
                }

                @media (max-width: 768px) {
                    .cta-card {
                        padding: 3rem 1.5rem;
                    }

                    .cta-break {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
