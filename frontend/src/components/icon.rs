use yew::prelude::*;

use crate::content::Icon;

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Heart => "♡",
            Icon::Brain => "🧠",
            Icon::Users => "👥",
            Icon::GraduationCap => "🎓",
            Icon::MapPin => "📍",
            Icon::MessageCircle => "💬",
            Icon::Calendar => "📅",
            Icon::ArrowRight => "→",
            Icon::Instagram => "◎",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::Clock => "🕒",
            Icon::Leaf => "🌿",
            Icon::Star => "★",
            Icon::Menu => "☰",
            Icon::Close => "✕",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}
