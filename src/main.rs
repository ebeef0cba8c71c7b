use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod effects {
    pub mod particles;
    pub mod scroll_reveal;
    pub mod typewriter;
}
mod components {
    pub mod commitment;
    pub mod contact_form;
    pub mod entrance;
    pub mod footer;
    pub mod hero;
    pub mod how_we_work;
    pub mod industries;
    pub mod navbar;
    pub mod our_work;
    pub mod why_us;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use pages::{contact::ContactUs, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact-us")]
    ContactUs,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::ContactUs => {
            info!("Rendering Contact page");
            html! { <ContactUs /> }
        }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
