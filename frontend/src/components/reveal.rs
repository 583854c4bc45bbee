use yew::prelude::*;

use crate::hooks::use_reveal;

/// Direction a block slides in from the first time it scrolls into view.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Scale,
    Fade,
}

impl RevealFrom {
    fn class(&self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-up",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
            RevealFrom::Scale => "reveal-scale",
            RevealFrom::Fade => "reveal-fade",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.from.class(), visible.then_some("visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
