pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::pages::{
    coming_soon::{ComingSoon, NotFound},
    home::Home,
};
use crate::styles::{APP_CSS, PAGE};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/archive")]
    Archive,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/multiplayer")]
    Multiplayer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <style>{ APP_CSS }</style>
            <div class={PAGE}>
                <Header />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Archive => html! { <ComingSoon title="Puzzle Archive" /> },
        Route::Leaderboard => html! { <ComingSoon title="Leaderboard" /> },
        Route::Multiplayer => html! { <ComingSoon title="Multiplayer" /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
