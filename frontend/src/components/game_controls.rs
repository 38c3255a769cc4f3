use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};

#[derive(Properties, PartialEq)]
pub struct GameControlsProps {
    pub selected_count: usize,
    pub can_submit: bool,
    pub can_shuffle: bool,
    pub is_submitting: bool,
    pub on_submit: Callback<()>,
    pub on_deselect: Callback<()>,
    pub on_shuffle: Callback<()>,
}

#[function_component(GameControls)]
pub fn game_controls(props: &GameControlsProps) -> Html {
    let on_shuffle = props.on_shuffle.reform(|_: MouseEvent| ());
    let on_deselect = props.on_deselect.reform(|_: MouseEvent| ());
    let on_submit = props.on_submit.reform(|_: MouseEvent| ());

    html! {
        <div class="flex flex-wrap justify-center gap-3">
            <Button
                variant={ButtonVariant::Outline}
                onclick={on_shuffle}
                disabled={!props.can_shuffle || props.is_submitting}
            >
                { "Shuffle" }
            </Button>
            <Button
                variant={ButtonVariant::Outline}
                onclick={on_deselect}
                disabled={props.selected_count == 0 || props.is_submitting}
            >
                { "Deselect All" }
            </Button>
            <Button
                variant={ButtonVariant::Primary}
                onclick={on_submit}
                disabled={!props.can_submit || props.is_submitting}
                class={classes!((!props.can_submit).then_some("opacity-50"))}
            >
                { if props.is_submitting { "Checking..." } else { "Submit" } }
            </Button>
        </div>
    }
}
