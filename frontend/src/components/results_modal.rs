use js_sys::{Function, Promise, Reflect};
use shared::constants::{CATEGORY_COUNT, COPIED_RESET_MS};
use shared::share::format_time;
use shared::shared_connections_game::Category;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::hooks::use_transient;
use crate::styles::{difficulty_classes, MODAL, MODAL_BACKDROP};

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let navigator = window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ResultsModalProps {
    pub is_open: bool,
    pub is_won: bool,
    pub puzzle_number: u32,
    pub solved_categories: Vec<Category>,
    pub mistakes: u32,
    pub solve_time_ms: Option<u64>,
    pub used_ai_hint: bool,
    pub share_text: String,
    pub on_play_again: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ResultsModal)]
pub fn results_modal(props: &ResultsModalProps) -> Html {
    let copied = use_transient::<bool>(COPIED_RESET_MS);

    if !props.is_open {
        return html! {};
    }

    let on_share = {
        let copied = copied.clone();
        let text = props.share_text.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let text = text.clone();
            spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => copied.show(true),
                    Err(e) => log::warn!("Failed to copy results: {:?}", e),
                }
            });
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_play_again = props.on_play_again.reform(|_: MouseEvent| ());

    let time = props
        .solve_time_ms
        .map(format_time)
        .unwrap_or_else(|| "--".to_string());

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class={MODAL_BACKDROP} onclick={on_close.clone()} />
            <div class={MODAL}>
                <button
                    type="button"
                    class="absolute top-4 right-4 text-gray-400 hover:text-gray-600 text-xl leading-none"
                    onclick={on_close}
                >
                    { "✕" }
                </button>

                <div class="text-center mb-6">
                    <h2 class="text-2xl font-bold mb-2">
                        { if props.is_won { "Congratulations!" } else { "Better luck next time!" } }
                    </h2>
                    <p class="text-gray-600">{ format!("Connections #{}", props.puzzle_number) }</p>
                </div>

                <div class="grid grid-cols-3 gap-4 mb-6">
                    <div class="text-center">
                        <div class="text-2xl font-bold">
                            { format!("{}/{}", props.solved_categories.len(), CATEGORY_COUNT) }
                        </div>
                        <div class="text-xs text-gray-500">{ "Categories" }</div>
                    </div>
                    <div class="text-center">
                        <div class="text-2xl font-bold">{ props.mistakes }</div>
                        <div class="text-xs text-gray-500">{ "Mistakes" }</div>
                    </div>
                    <div class="text-center">
                        <div class="text-2xl font-bold">{ time }</div>
                        <div class="text-xs text-gray-500">{ "Time" }</div>
                    </div>
                </div>

                <div class="space-y-2 mb-6">
                    {
                        for props.solved_categories.iter().map(|category| html! {
                            <div
                                key={category.id.clone()}
                                class={classes!("rounded-lg", "py-2", "px-4", "text-center", difficulty_classes(category.difficulty))}
                            >
                                <div class="font-bold text-sm uppercase">{ &category.name }</div>
                                <div class="text-xs opacity-80">{ category.words.join(", ") }</div>
                            </div>
                        })
                    }
                </div>

                if props.used_ai_hint {
                    <p class="text-center text-sm text-gray-500 mb-4">{ "* AI hint was used" }</p>
                }

                <div class="flex gap-3">
                    <Button variant={ButtonVariant::Outline} class="flex-1" onclick={on_share}>
                        { if *copied { "Copied!" } else { "Share" } }
                    </Button>
                    <Button variant={ButtonVariant::Primary} class="flex-1" onclick={on_play_again}>
                        { "Play Again" }
                    </Button>
                </div>
            </div>
        </div>
    }
}
