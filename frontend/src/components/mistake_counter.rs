use shared::constants::MAX_MISTAKES;
use yew::prelude::*;

use crate::styles::{SLOT_EMPTY, SLOT_FILLED};

/// One entry per slot, `true` for the mistakes the player still has.
pub fn mistake_slots(mistakes: u32, max_mistakes: u32) -> Vec<bool> {
    let remaining = max_mistakes.saturating_sub(mistakes);
    (0..max_mistakes).map(|i| i < remaining).collect()
}

#[derive(Properties, PartialEq)]
pub struct MistakeCounterProps {
    pub mistakes: u32,
    #[prop_or(MAX_MISTAKES)]
    pub max_mistakes: u32,
}

#[function_component(MistakeCounter)]
pub fn mistake_counter(props: &MistakeCounterProps) -> Html {
    html! {
        <div class="flex items-center gap-2">
            <span class="text-sm text-gray-600">{ "Mistakes remaining:" }</span>
            <div class="flex gap-1">
                {
                    for mistake_slots(props.mistakes, props.max_mistakes).into_iter().map(|filled| html! {
                        <div class={classes!(
                            "w-4", "h-4", "rounded-full", "transition-all", "duration-300",
                            if filled { SLOT_FILLED } else { SLOT_EMPTY }
                        )} />
                    })
                }
            </div>
        </div>
    }
}
