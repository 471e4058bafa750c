use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod content;
mod components {
    pub mod gallery;
    pub mod reason_list;
    pub mod reveal;
}
mod pages {
    pub mod anniversary;
}

use pages::anniversary::AnniversaryPage;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering anniversary page");
            html! { <AnniversaryPage /> }
        },
        Route::NotFound => {
            warn!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
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
