use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod accordion;
mod anchor;
mod config;
mod dom;
mod events;
mod scroll;
mod tabs;
mod timing {
    pub mod debounce;
    pub mod scheduler;
    pub mod throttle;
    #[cfg(test)]
    pub mod virtual_clock;
}
mod components {
    pub mod anchor_link;
    pub mod faq;
    pub mod highlight;
}
mod pages {
    pub mod context;
    pub mod landing;
}

use config::LandingConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| LandingConfig::load(), ());

    html! {
        <ContextProvider<LandingConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<LandingConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    yew::Renderer::<App>::new().render();
}
