use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;
use crate::content::FaqEntry;
use crate::state::selection::Selection;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq(props: &ConfigProps) -> Html {
    let open = use_state(Selection::<usize>::default);

    html! {
        <section id="faq" class="page-section faq">
            <div class="container faq-container">
                <SectionHeading title="Perguntas Frequentes" subtitle={Some(AttrValue::from("Dúvidas"))} />
                {
                    props.config.content.faq.iter().enumerate().map(|(i, entry)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(open.select(i)))
                        };
                        html! {
                            <FaqItem key={i} entry={entry.clone()} open={open.is_open(i)} on_toggle={on_toggle} />
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .faq {
                    background: #ffffff;
                }

                .faq-container {
                    max-width: 800px;
                }

                .faq-item {
                    margin-bottom: 1rem;
                    overflow: hidden;
                    border: 1px solid var(--ane-100);
                    border-radius: 12px;
                    background: var(--ane-50);
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: var(--ane-200);
                }

                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1.5rem;
                    border: none;
                    background: none;
                    font-family: var(--serif);
                    font-size: 1.15rem;
                    text-align: left;
                    color: var(--ink);
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: var(--ane-500);
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--ane-400);
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    padding: 0 1.5rem;
                    overflow: hidden;
                    opacity: 0;
                    transition: max-height 0.5s ease, opacity 0.3s ease, padding 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                    opacity: 1;
                }

                .faq-answer p {
                    margin: 0;
                    line-height: 1.7;
                    color: var(--muted);
                }

                @media (max-width: 768px) {
                    .faq-question {
                        padding: 1rem;
                        font-size: 1.05rem;
                    }

                    .faq-item.open .faq-answer {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
