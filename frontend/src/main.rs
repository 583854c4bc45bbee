use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod hooks;
mod presets;
mod theme;
mod state {
    pub mod carousel;
    pub mod count_up;
    pub mod scroll;
    pub mod selection;
    pub mod text;
    pub mod typewriter;
}
mod components {
    pub mod button;
    pub mod count_up;
    pub mod icon;
    pub mod reveal;
    pub mod section_heading;
}
mod sections {
    pub mod about;
    pub mod cta;
    pub mod faq;
    pub mod floating_cta;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod location;
    pub mod modalities;
    pub mod navbar;
    pub mod pinned;
    pub mod quotes;
    pub mod specialties;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use config::Preset;
use pages::landing::Landing;
use theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classico")]
    Classic,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing preset={Preset::Consultorio} /> }
        }
        Route::Classic => {
            info!("Rendering Classic page");
            html! { <Landing preset={Preset::Classico} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Theme />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
