use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles::{CENTERED, NAV_LINK, TEXT_BODY, TEXT_H2};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub title: AttrValue,
}

#[function_component(ComingSoon)]
pub fn coming_soon(props: &ComingSoonProps) -> Html {
    html! {
        <div class={CENTERED}>
            <div class="text-center">
                <h1 class={TEXT_H2}>{ &props.title }</h1>
                <p class={TEXT_BODY}>{ "Coming soon..." }</p>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={CENTERED}>
            <div class="text-center space-y-4">
                <h1 class={TEXT_H2}>{ "Page not found" }</h1>
                <Link<Route> to={Route::Home} classes={NAV_LINK}>{ "Back to today's puzzle" }</Link<Route>>
            </div>
        </div>
    }
}
