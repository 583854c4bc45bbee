use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::count_up::RevealLatch;

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Subscribes to window scroll and maps each position through `project`.
/// Only re-renders when the projected value changes.
#[hook]
pub fn use_scroll<T, F>(project: F) -> T
where
    T: Clone + PartialEq + 'static,
    F: Fn(f64) -> T + 'static,
{
    let project = Rc::new(project);
    let value = {
        let project = project.clone();
        use_state_eq(move || project(current_scroll_y()))
    };

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::<dyn Fn()>::new(move || {
                    value.set(project(current_scroll_y()));
                });
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    // Pick up a restored scroll position
                    let _ = callback.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    (*value).clone()
}

/// Flips to true the first time `node` intersects the viewport and stays
/// there for the rest of the component's life.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut teardown: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                match node.cast::<Element>() {
                    Some(element) => {
                        let latch = Rc::new(RefCell::new(RevealLatch::default()));
                        let setter = revealed.setter();
                        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let intersecting = entries.iter().any(|entry| {
                                    entry
                                        .dyn_into::<IntersectionObserverEntry>()
                                        .map(|entry| entry.is_intersecting())
                                        .unwrap_or(false)
                                });
                                if latch.borrow_mut().observe(intersecting) {
                                    setter.set(true);
                                    observer.disconnect();
                                }
                            },
                        );
                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.15));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                teardown = Some((observer, callback));
                            }
                            // No observer support: show the content rather than hide it forever
                            Err(_) => revealed.set(true),
                        }
                    }
                    None => revealed.set(true),
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}
