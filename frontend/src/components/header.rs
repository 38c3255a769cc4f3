use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles::{NAV, NAV_BRAND, NAV_INNER, NAV_ITEMS, NAV_LINK};
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <nav class={NAV}>
            <div class={NAV_INNER}>
                <Link<Route> to={Route::Home} classes={NAV_BRAND}>{ "Connections AI" }</Link<Route>>
                <div class={NAV_ITEMS}>
                    <Link<Route> to={Route::Home} classes={NAV_LINK}>{ "Play" }</Link<Route>>
                    <Link<Route> to={Route::Archive} classes={NAV_LINK}>{ "Archive" }</Link<Route>>
                    <Link<Route> to={Route::Leaderboard} classes={NAV_LINK}>{ "Leaderboard" }</Link<Route>>
                    <Link<Route> to={Route::Multiplayer} classes={NAV_LINK}>{ "Multiplayer" }</Link<Route>>
                </div>
            </div>
        </nav>
    }
}
