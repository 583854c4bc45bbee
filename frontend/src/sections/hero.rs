use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::IconView;
use crate::config::ConfigProps;
use crate::content::Icon;
use crate::dom::{open_external, scroll_to_anchor};
use crate::hooks::use_scroll;
use crate::state::scroll::parallax_offset;
use crate::state::typewriter::{Typewriter, TypewriterAction};

const TYPEWRITER_TICK_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
}

/// Types `text` out once per mount.
#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let typed = {
        let text = props.text.clone();
        use_reducer(move || Typewriter::new(&text))
    };

    {
        let done = typed.is_done();
        let typed = typed.clone();
        use_effect_with_deps(
            move |done: &bool| {
                let ticker = (!*done).then(|| {
                    Interval::new(TYPEWRITER_TICK_MS, move || {
                        typed.dispatch(TypewriterAction::Step);
                    })
                });
                move || drop(ticker)
            },
            done,
        );
    }

    html! {
        <span class="typewriter">
            <span class="typewriter-text">{typed.text().to_string()}</span>
            <span class="typewriter-caret">{"|"}</span>
        </span>
    }
}

#[function_component(Hero)]
pub fn hero(props: &ConfigProps) -> Html {
    let config = &props.config;
    let practice = &config.practice;
    let offset = use_scroll(|y| parallax_offset(y).round() as i32);

    let schedule = {
        let link = config.whatsapp_link();
        Callback::from(move |_: MouseEvent| open_external(&link))
    };
    let learn_more = Callback::from(|_: MouseEvent| {
        scroll_to_anchor("#sobre");
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-blob hero-blob-top"></div>
            <div class="hero-blob hero-blob-bottom"></div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="hero-title-line">
                        <TypewriterText text={practice.title.clone()} />
                    </div>
                    <h1 class="hero-name">
                        {&practice.first_name}<br/>
                        <span class="hero-name-accent">{&practice.last_name}</span>
                    </h1>
                    <p class="hero-tagline">{&practice.tagline}</p>
                    <div class="hero-actions">
                        <Button onclick={schedule}>
                            {"Agende sua Consulta"}<IconView icon={Icon::ArrowRight} />
                        </Button>
                        <Button variant={ButtonVariant::Outline} onclick={learn_more}>
                            {"Saiba Mais"}
                        </Button>
                    </div>
                </div>

                <div class="hero-visual" style={format!("transform: translateY({}px);", offset)}>
                    <div class="hero-frame">
                        <img src={practice.portrait_url.clone()} alt={practice.full_name()} />
                    </div>
                    <div class="hero-badge">
                        <div class="hero-badge-icon"><IconView icon={Icon::Brain} /></div>
                        <div>
                            <p class="hero-badge-label">{"Abordagem"}</p>
                            <p class="hero-badge-value">{&practice.approach}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    align-items: center;
                    min-height: 100vh;
                    padding-top: 5rem;
                    overflow: hidden;
                    background: var(--ane-50);
                }

                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    pointer-events: none;
                }

                .hero-blob-top {
                    top: 0;
                    right: 0;
                    width: 500px;
                    height: 500px;
                    background: rgba(230, 207, 193, 0.3);
                    filter: blur(100px);
                    transform: translate(50%, -50%);
                }

                .hero-blob-bottom {
                    bottom: 0;
                    left: 0;
                    width: 300px;
                    height: 300px;
                    background: rgba(201, 162, 140, 0.2);
                    filter: blur(80px);
                    transform: translate(-50%, 50%);
                }

                .hero-grid {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy {
                    animation: heroSlideIn 0.8s ease both;
                }

                @keyframes heroSlideIn {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .hero-title-line {
                    height: 2rem;
                    margin-bottom: 0.5rem;
                    color: var(--ane-400);
                    font-weight: 500;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .typewriter-caret {
                    animation: caretBlink 1s step-end infinite;
                }

                @keyframes caretBlink {
                    50% { opacity: 0; }
                }

                .hero-name {
                    margin: 0 0 1.5rem;
                    font-family: var(--serif);
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 400;
                    line-height: 1.1;
                }

                .hero-name-accent {
                    color: var(--ane-400);
                    font-style: italic;
                }

                .hero-tagline {
                    max-width: 28rem;
                    margin-bottom: 2rem;
                    font-size: 1.25rem;
                    font-weight: 300;
                    font-style: italic;
                    color: var(--muted);
                    animation: heroFade 1s ease 1s both;
                }

                @keyframes heroFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-visual {
                    position: relative;
                    justify-self: center;
                    width: 24rem;
                    height: 32rem;
                    will-change: transform;
                }

                .hero-frame {
                    width: 100%;
                    height: 100%;
                    border-radius: 2rem;
                    border: 4px solid #ffffff;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                    animation: heroFade 1s ease 0.2s both;
                }

                .hero-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-badge {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #ffffff;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                    animation: heroFade 0.6s ease 1.2s both;
                }

                .hero-badge-icon {
                    padding: 0.5rem;
                    border-radius: 50%;
                    background: var(--ane-100);
                    font-size: 1.5rem;
                }

                .hero-badge p {
                    margin: 0;
                }

                .hero-badge-label {
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    color: var(--muted);
                }

                .hero-badge-value {
                    font-family: var(--serif);
                    font-size: 1.1rem;
                    font-weight: 700;
                }

                @media (max-width: 768px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-visual {
                        order: -1;
                        width: 20rem;
                        height: 28rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
