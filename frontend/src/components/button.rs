use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    White,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant = match props.variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Outline => "btn-outline",
        ButtonVariant::White => "btn-white",
    };

    html! {
        <button class={classes!("btn", variant, props.class.clone())} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}
