use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config::ConfigProps;
use crate::content::{Icon, Testimonial};
use crate::state::selection::Selection;
use crate::state::text::{truncate_chars, TESTIMONIAL_PREVIEW_CHARS};

/// What a testimonial card shows for a given expansion state.
#[derive(Debug, PartialEq)]
pub struct TestimonialView {
    pub text: String,
    pub has_toggle: bool,
    pub expanded: bool,
}

pub fn testimonial_view(testimonial: &Testimonial, expanded: bool) -> TestimonialView {
    if !testimonial.long_form {
        return TestimonialView {
            text: testimonial.text.clone(),
            has_toggle: false,
            expanded: false,
        };
    }
    TestimonialView {
        text: if expanded {
            testimonial.text.clone()
        } else {
            truncate_chars(&testimonial.text, TESTIMONIAL_PREVIEW_CHARS)
        },
        has_toggle: true,
        expanded,
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &ConfigProps) -> Html {
    let entries = &props.config.content.testimonials;
    let expanded = use_state(Selection::<usize>::default);

    html! {
        <section id="depoimentos-pacientes" class="page-section testimonials">
            <div class="container">
                <SectionHeading title="O Que Dizem os Pacientes" subtitle={Some(AttrValue::from("Depoimentos"))} />
                <div class="testimonials-grid">
                    {
                        entries.iter().enumerate().map(|(i, entry)| {
                            let view = testimonial_view(entry, expanded.is_open(i));
                            let toggle = {
                                let expanded = expanded.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    expanded.set(expanded.select(i));
                                })
                            };
                            html! {
                                <Reveal key={i} delay_ms={100 * i as u32} class={classes!("testimonial-card", view.expanded.then_some("expanded"))}>
                                    <div class="testimonial-rating" aria-label={format!("{} de 5 estrelas", entry.rating)}>
                                        { for (0..entry.rating).map(|_| html! { <IconView icon={Icon::Star} /> }) }
                                    </div>
                                    <p class="testimonial-text">{view.text}</p>
                                    {
                                        if view.has_toggle {
                                            html! {
                                                <button class="testimonial-toggle" onclick={toggle} aria-expanded={view.expanded.to_string()}>
                                                    {if view.expanded { "Ler menos" } else { "Ler mais" }}
                                                </button>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <p class="testimonial-author">{format!("— {}", entry.author)}</p>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    background: #ffffff;
                }

                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    align-items: start;
                }

                .testimonial-card {
                    padding: 2rem;
                    border: 1px solid var(--ane-100);
                    border-radius: 1.5rem;
                    background: var(--ane-50);
                }

                .testimonial-card.expanded {
                    background: #ffffff;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }

                .testimonial-rating {
                    margin-bottom: 1rem;
                    color: var(--ane-400);
                    letter-spacing: 0.15em;
                }

                .testimonial-text {
                    margin: 0 0 1rem;
                    font-size: 1.05rem;
                    font-weight: 300;
                    line-height: 1.75;
                    white-space: pre-line;
                    color: var(--ink);
                }

                .testimonial-toggle {
                    padding: 0;
                    margin-bottom: 1rem;
                    border: none;
                    background: none;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: var(--ane-500);
                    cursor: pointer;
                }

                .testimonial-toggle:hover {
                    color: var(--ane-400);
                }

                .testimonial-author {
                    margin: 0;
                    font-family: var(--serif);
                    font-style: italic;
                    color: var(--muted);
                }

                @media (max-width: 768px) {
                    .testimonials-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, long_form: bool) -> Testimonial {
        Testimonial {
            text: text.to_string(),
            author: "P.".to_string(),
            rating: 5,
            long_form,
        }
    }

    #[test]
    fn short_entries_always_render_in_full_without_toggle() {
        let short = entry(&"curto ".repeat(40), false);
        for expanded in [false, true] {
            let view = testimonial_view(&short, expanded);
            assert_eq!(view.text, short.text);
            assert!(!view.has_toggle);
            assert!(!view.expanded);
        }
    }

    #[test]
    fn collapsed_long_entry_is_truncated() {
        let long = entry(&"palavra ".repeat(60), true);
        let view = testimonial_view(&long, false);
        assert!(view.has_toggle);
        assert!(view.text.ends_with("..."));
        assert!(view.text.chars().count() <= TESTIMONIAL_PREVIEW_CHARS + 3);
    }

    #[test]
    fn expanded_long_entry_keeps_line_breaks() {
        let long = entry("Primeiro parágrafo.\n\nSegundo parágrafo.", true);
        let view = testimonial_view(&long, true);
        assert_eq!(view.text, "Primeiro parágrafo.\n\nSegundo parágrafo.");
        assert!(view.expanded);
    }

    #[test]
    fn expanding_long_then_selecting_short_collapses_long() {
        let entries = vec![entry("Curto e direto.", false), entry(&"longo ".repeat(50), true)];
        let (a, b) = (0, 1);

        let state = Selection::None.select(b);
        assert!(testimonial_view(&entries[b], state.is_open(b)).expanded);

        let state = state.select(a);
        let view_a = testimonial_view(&entries[a], state.is_open(a));
        let view_b = testimonial_view(&entries[b], state.is_open(b));
        assert!(!view_b.expanded);
        assert!(view_b.text.ends_with("..."));
        assert_eq!(view_a.text, "Curto e direto.");
        assert!(!view_a.has_toggle);
    }
}
