use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::hooks::use_reveal;
use crate::state::count_up::{CountUp, CountUpAction};

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct CountUpNumberProps {
    pub target: u32,
    #[prop_or_default]
    pub start: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from `start` to `target` the first time it scrolls into view.
#[function_component(CountUpNumber)]
pub fn count_up_number(props: &CountUpNumberProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let count = {
        let (start, target) = (props.start as f64, props.target as f64);
        use_reducer(move || CountUp::new(start, target))
    };

    {
        let count = count.clone();
        let done = count.is_done();
        use_effect_with_deps(
            move |(revealed, done)| {
                let frames = (*revealed && !*done).then(|| {
                    let started_at = Date::now();
                    Interval::new(FRAME_MS, move || {
                        count.dispatch(CountUpAction::Frame(Date::now() - started_at));
                    })
                });
                // Dropping the interval cancels it
                move || drop(frames)
            },
            (revealed, done),
        );
    }

    html! {
        <span ref={node} class="count-up">
            {count.display()}{props.suffix.clone()}
        </span>
    }
}
