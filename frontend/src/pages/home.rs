use gloo_timers::callback::Timeout;
use shared::constants::{HIGHLIGHT_DURATION_MS, HINT_ERROR, MAX_HINTS, RESULTS_DELAY_MS};
use shared::share::share_text;
use shared::shared_connections_game::AiHint;
use shared::SessionPhase;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::{GameBoard, HintPanel, ResultsModal};
use crate::hooks::{use_game, use_transient};
use crate::styles::{
    BADGE_ONE_AWAY, CARD_ERROR, CENTERED, CONTAINER, GAME_LAYOUT, LOADING_SPINNER, MAIN, TEXT_BODY,
    TEXT_H2, TEXT_SMALL,
};

#[function_component(Home)]
pub fn home() -> Html {
    let game = use_game();
    let load_error = use_state(|| None::<String>);
    let show_results = use_state(|| false);
    let hints_used = use_state(|| 0u32);
    let current_hint = use_state(|| None::<AiHint>);
    let hint_loading = use_state(|| false);
    let hint_error = use_state(|| None::<String>);
    let highlighted = use_transient::<Vec<String>>(HIGHLIGHT_DURATION_MS);

    // Every new session starts with a clean hint panel
    let start = {
        let game = game.clone();
        let load_error = load_error.clone();
        let hints_used = hints_used.clone();
        let current_hint = current_hint.clone();
        let hint_loading = hint_loading.clone();
        let hint_error = hint_error.clone();
        let highlighted = highlighted.clone();
        Callback::from(move |_: ()| {
            load_error.set(None);
            hints_used.set(0);
            current_hint.set(None);
            hint_loading.set(false);
            hint_error.set(None);
            highlighted.clear();
            let pending = game.start_game(None);
            let load_error = load_error.clone();
            spawn_local(async move {
                if let Err(e) = pending.await {
                    load_error.set(Some(e.user_message()));
                }
            });
        })
    };

    {
        let start = start.clone();
        use_effect_with((), move |_| {
            start.emit(());
            || ()
        });
    }

    // Results appear a moment after the final guess resolves
    {
        let show_results = show_results.clone();
        use_effect_with(game.is_complete(), move |is_complete| {
            let timeout = if *is_complete {
                let show_results = show_results.clone();
                Some(Timeout::new(RESULTS_DELAY_MS, move || show_results.set(true)))
            } else {
                show_results.set(false);
                None
            };
            move || drop(timeout)
        });
    }

    let on_word_click = {
        let game = game.clone();
        Callback::from(move |word: String| game.select_word(word))
    };
    let on_submit = {
        let game = game.clone();
        Callback::from(move |_: ()| game.submit_guess())
    };
    let on_deselect_all = {
        let game = game.clone();
        Callback::from(move |_: ()| game.clear_selection())
    };
    let on_shuffle = {
        let game = game.clone();
        Callback::from(move |_: ()| game.shuffle_words())
    };

    let on_request_hint = {
        let game = game.clone();
        let hints_used = hints_used.clone();
        let current_hint = current_hint.clone();
        let hint_loading = hint_loading.clone();
        let hint_error = hint_error.clone();
        Callback::from(move |_: ()| {
            if *hint_loading || *hints_used >= MAX_HINTS {
                return;
            }
            hint_loading.set(true);
            hint_error.set(None);

            let pending = game.get_hint();
            let issued_epoch = game.current_epoch();
            let game = game.clone();
            let used = *hints_used;
            let hints_used = hints_used.clone();
            let current_hint = current_hint.clone();
            let hint_loading = hint_loading.clone();
            let hint_error = hint_error.clone();
            spawn_local(async move {
                let result = pending.await;
                if game.current_epoch() != issued_epoch {
                    return;
                }
                match result {
                    Some(hint) => {
                        hints_used.set(used + 1);
                        current_hint.set(Some(hint));
                    }
                    None => hint_error.set(Some(HINT_ERROR.to_string())),
                }
                hint_loading.set(false);
            });
        })
    };
    let on_highlight_words = {
        let highlighted = highlighted.clone();
        Callback::from(move |words: Vec<String>| highlighted.show(words))
    };
    let on_clear_hint = {
        let current_hint = current_hint.clone();
        let highlighted = highlighted.clone();
        Callback::from(move |_: ()| {
            current_hint.set(None);
            highlighted.clear();
        })
    };

    let on_play_again = {
        let start = start.clone();
        let show_results = show_results.clone();
        Callback::from(move |_: ()| {
            show_results.set(false);
            start.emit(());
        })
    };
    let on_close_results = {
        let show_results = show_results.clone();
        Callback::from(move |_: ()| show_results.set(false))
    };

    if let Some(error) = (*load_error).clone() {
        let on_retry = start.reform(|_: MouseEvent| ());
        return html! {
            <div class={CENTERED}>
                <div class={classes!(CARD_ERROR, "max-w-md")}>
                    <p class="mb-4">{ error }</p>
                    <Button variant={ButtonVariant::Primary} onclick={on_retry}>{ "Try Again" }</Button>
                </div>
            </div>
        };
    }

    let puzzle = match (game.phase(), game.puzzle()) {
        (SessionPhase::Loading, _) | (SessionPhase::Idle, _) | (_, None) => {
            return html! {
                <div class={CENTERED}>
                    <div class="text-center">
                        <div class={LOADING_SPINNER} />
                        <p class={TEXT_BODY}>{ "Loading today's puzzle..." }</p>
                    </div>
                </div>
            };
        }
        (_, Some(puzzle)) => puzzle.clone(),
    };

    let share = share_text(&game).unwrap_or_default();

    html! {
        <main class={MAIN}>
            <div class={CONTAINER}>
                <div class="text-center mb-6">
                    <h1 class={TEXT_H2}>{ puzzle.display_date() }</h1>
                    <p class={TEXT_SMALL}>{ format!("Puzzle #{}", puzzle.puzzle_number) }</p>
                    <p class={classes!(TEXT_BODY, "mt-2")}>{ "Create four groups of four!" }</p>
                </div>

                if game.last_guess_one_away() {
                    <div class="text-center mb-4">
                        <span class={BADGE_ONE_AWAY}>{ "One away!" }</span>
                    </div>
                }

                <div class={GAME_LAYOUT}>
                    <GameBoard
                        words={game.remaining_words().to_vec()}
                        selected_words={game.selected_words().to_vec()}
                        highlighted_words={(*highlighted).clone()}
                        solved_categories={game.solved_categories().to_vec()}
                        mistakes={game.mistakes()}
                        is_submitting={game.is_submitting()}
                        is_complete={game.is_complete()}
                        shaking_words={game.shaking_words().to_vec()}
                        {on_word_click}
                        {on_submit}
                        {on_deselect_all}
                        {on_shuffle}
                    />
                    <HintPanel
                        hints_used={*hints_used}
                        disabled={game.is_complete()}
                        current_hint={(*current_hint).clone()}
                        is_loading={*hint_loading}
                        error={(*hint_error).clone()}
                        {on_request_hint}
                        {on_highlight_words}
                        on_clear={on_clear_hint}
                    />
                </div>

                <ResultsModal
                    is_open={*show_results}
                    is_won={game.is_won()}
                    puzzle_number={puzzle.puzzle_number}
                    solved_categories={game.solved_categories().to_vec()}
                    mistakes={game.mistakes()}
                    solve_time_ms={game.solve_time_ms()}
                    used_ai_hint={game.used_ai_hint()}
                    share_text={share}
                    {on_play_again}
                    on_close={on_close_results}
                />
            </div>
        </main>
    }
}
