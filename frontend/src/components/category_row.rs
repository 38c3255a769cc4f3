use shared::shared_connections_game::Category;
use yew::prelude::*;

use crate::styles::{difficulty_classes, ANIMATE_BOUNCE_IN};

#[derive(Properties, PartialEq)]
pub struct CategoryRowProps {
    pub category: Category,
    #[prop_or(false)]
    pub animate_in: bool,
}

#[function_component(CategoryRow)]
pub fn category_row(props: &CategoryRowProps) -> Html {
    let category = &props.category;

    html! {
        <div class={classes!(
            "w-full", "rounded-lg", "py-4", "px-6",
            difficulty_classes(category.difficulty),
            props.animate_in.then_some(ANIMATE_BOUNCE_IN)
        )}>
            <div class="text-center">
                <h3 class="font-bold text-lg uppercase tracking-wide mb-1">{ &category.name }</h3>
                <p class="text-sm opacity-90">{ category.words.join(", ") }</p>
            </div>
        </div>
    }
}
