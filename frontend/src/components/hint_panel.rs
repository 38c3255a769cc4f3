use shared::constants::MAX_HINTS;
use shared::shared_connections_game::AiHint;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::styles::{PANEL, PANEL_CARD, TEXT_ERROR};

/// Whether another hint may be requested.
pub fn can_request_hint(hints_used: u32, max_hints: u32, disabled: bool) -> bool {
    hints_used < max_hints && !disabled
}

#[derive(Properties, PartialEq)]
pub struct HintPanelProps {
    pub hints_used: u32,
    #[prop_or(MAX_HINTS)]
    pub max_hints: u32,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub current_hint: Option<AiHint>,
    #[prop_or(false)]
    pub is_loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_request_hint: Callback<()>,
    pub on_highlight_words: Callback<Vec<String>>,
    pub on_clear: Callback<()>,
}

#[function_component(HintPanel)]
pub fn hint_panel(props: &HintPanelProps) -> Html {
    let can_request = can_request_hint(props.hints_used, props.max_hints, props.disabled);

    let on_request = {
        let on_request_hint = props.on_request_hint.clone();
        let is_loading = props.is_loading;
        Callback::from(move |_: MouseEvent| {
            if !can_request || is_loading {
                return;
            }
            on_request_hint.emit(());
        })
    };

    let body = match &props.current_hint {
        Some(hint) => {
            let on_show_words = {
                let words = hint.suggested_words.clone();
                let on_highlight_words = props.on_highlight_words.clone();
                Callback::from(move |_: MouseEvent| {
                    if !words.is_empty() {
                        on_highlight_words.emit(words.clone());
                    }
                })
            };
            let on_clear = props.on_clear.reform(|_: MouseEvent| ());

            html! {
                <div class="space-y-3">
                    <div class={PANEL_CARD}>
                        <p class="text-gray-700">{ &hint.hint }</p>
                        <div class="mt-2 flex items-center gap-2">
                            <span class="text-xs text-gray-500">
                                { format!("Confidence: {}%", hint.confidence_percent()) }
                            </span>
                        </div>
                    </div>
                    <div class="flex gap-2">
                        <Button
                            variant={ButtonVariant::Outline}
                            size={ButtonSize::Sm}
                            onclick={on_show_words}
                            disabled={hint.suggested_words.is_empty()}
                        >
                            { "Show suggested words" }
                        </Button>
                        <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={on_clear}>
                            { "Clear" }
                        </Button>
                    </div>
                </div>
            }
        }
        None => html! {
            <div class="space-y-3">
                if let Some(error) = &props.error {
                    <p class={TEXT_ERROR}>{ error }</p>
                }
                <p class="text-sm text-gray-600">
                    { "Stuck? Ask the AI for a hint about one of the remaining categories." }
                </p>
                <Button
                    variant={ButtonVariant::Secondary}
                    size={ButtonSize::Sm}
                    onclick={on_request}
                    disabled={!can_request || props.is_loading}
                    class="w-full"
                >
                    if props.is_loading {
                        <span class="flex items-center gap-2">
                            <span class="animate-spin h-4 w-4 border-2 border-gray-400 border-t-gray-800 rounded-full" />
                            { "Thinking..." }
                        </span>
                    } else {
                        { "Get AI Hint" }
                    }
                </Button>
                if !can_request && props.hints_used >= props.max_hints {
                    <p class="text-xs text-gray-500 text-center">{ "No more hints available" }</p>
                }
            </div>
        },
    };

    html! {
        <div class={PANEL}>
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold text-gray-800">{ "AI Assistant" }</h3>
                <span class="text-sm text-gray-500">
                    { format!("{}/{} hints used", props.hints_used, props.max_hints) }
                </span>
            </div>
            { body }
        </div>
    }
}
