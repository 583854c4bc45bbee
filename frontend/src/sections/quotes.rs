use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ConfigProps;
use crate::state::carousel::{Carousel, CarouselAction};

const ROTATE_EVERY_MS: u32 = 5000;

#[function_component(Quotes)]
pub fn quotes(props: &ConfigProps) -> Html {
    let quotes = &props.config.content.quotes;
    let carousel = {
        let len = quotes.len();
        use_reducer(move || Carousel::new(len))
    };

    // One timer for the life of the section; picking a dot never touches it
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let rotation = Interval::new(ROTATE_EVERY_MS, move || {
                    carousel.dispatch(CarouselAction::Tick);
                });
                move || drop(rotation)
            },
            (),
        );
    }

    let current = carousel.index();
    let leaving = carousel.previous();

    html! {
        <section class="quotes">
            <div class="quotes-texture"></div>
            <div class="container quotes-content">
                <div class="quotes-mark">{"“"}</div>
                <div class="quotes-stage">
                    {
                        quotes.iter().enumerate().filter_map(|(i, text)| {
                            let class = if i == current {
                                "quote-entering"
                            } else if Some(i) == leaving {
                                "quote-leaving"
                            } else {
                                return None;
                            };
                            // Keyed by state so each change restarts the CSS animation
                            Some(html! {
                                <p key={format!("{}-{}", i, class)} class={classes!("quote", class)} aria-hidden={(i != current).to_string()}>
                                    {text}
                                </p>
                            })
                        }).collect::<Html>()
                    }
                </div>
                <div class="quotes-dots">
                    {
                        (0..quotes.len()).map(|i| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(i)))
                            };
                            html! {
                                <button
                                    key={i}
                                    class={classes!("quote-dot", (i == current).then_some("active"))}
                                    aria-label={format!("Frase {}", i + 1)}
                                    onclick={onclick}
                                ></button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .quotes {
                    position: relative;
                    padding: 8rem 0;
                    overflow: hidden;
                    color: #ffffff;
                    background: linear-gradient(135deg, var(--ane-300), var(--ane-500));
                }

                .quotes-texture {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    background-image: url('https://www.transparenttextures.com/patterns/cubes.png');
                }

                .quotes-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }

                .quotes-mark {
                    margin-bottom: 2rem;
                    font-family: var(--serif);
                    font-size: 4rem;
                    color: var(--ane-200);
                    opacity: 0.5;
                }

                .quotes-stage {
                    position: relative;
                    height: 12rem;
                }

                .quote {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    max-width: 56rem;
                    margin: 0 auto;
                    font-family: var(--serif);
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                    line-height: 1.5;
                }

                .quote-entering {
                    animation: quoteIn 0.5s ease 0.5s both;
                }

                .quote-leaving {
                    animation: quoteOut 0.5s ease both;
                    pointer-events: none;
                }

                @keyframes quoteIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes quoteOut {
                    from { opacity: 1; transform: translateY(0); }
                    to { opacity: 0; transform: translateY(-20px); }
                }

                .quotes-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }

                .quote-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .quote-dot.active {
                    background: #ffffff;
                    transform: scale(1.25);
                }
                "#}
            </style>
        </section>
    }
}
