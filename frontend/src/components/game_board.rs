use shared::constants::GROUP_SIZE;
use shared::shared_connections_game::Category;
use yew::prelude::*;

use crate::components::{CategoryRow, GameControls, MistakeCounter, WordTile};
use crate::styles::{BOARD, BOARD_GRID};

/// Whether submit and shuffle are available. Both stay off once the session
/// is over, however it ended.
pub fn control_state(is_complete: bool, selected: usize, remaining: usize) -> (bool, bool) {
    let can_submit = !is_complete && selected == GROUP_SIZE;
    let can_shuffle = !is_complete && remaining > 0;
    (can_submit, can_shuffle)
}

#[derive(Properties, PartialEq)]
pub struct GameBoardProps {
    pub words: Vec<String>,
    pub selected_words: Vec<String>,
    #[prop_or_default]
    pub highlighted_words: Vec<String>,
    pub solved_categories: Vec<Category>,
    pub mistakes: u32,
    pub is_submitting: bool,
    pub is_complete: bool,
    #[prop_or_default]
    pub shaking_words: Vec<String>,
    pub on_word_click: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_deselect_all: Callback<()>,
    pub on_shuffle: Callback<()>,
}

#[function_component(GameBoard)]
pub fn game_board(props: &GameBoardProps) -> Html {
    let is_game_over = props.is_complete;
    let (can_submit, can_shuffle) =
        control_state(is_game_over, props.selected_words.len(), props.words.len());
    let newest = props.solved_categories.len().checked_sub(1);

    html! {
        <div class={BOARD}>
            <div class="space-y-2">
                {
                    for props.solved_categories.iter().enumerate().map(|(index, category)| html! {
                        <CategoryRow
                            key={category.id.clone()}
                            category={category.clone()}
                            animate_in={Some(index) == newest}
                        />
                    })
                }
            </div>

            if !props.words.is_empty() && !is_game_over {
                <div class={BOARD_GRID}>
                    {
                        for props.words.iter().map(|word| {
                            let is_selected = props.selected_words.contains(word)
                                || props.highlighted_words.contains(word);
                            html! {
                                <WordTile
                                    key={word.clone()}
                                    word={word.clone()}
                                    {is_selected}
                                    is_disabled={props.is_submitting}
                                    is_shaking={props.shaking_words.contains(word)}
                                    on_click={props.on_word_click.clone()}
                                />
                            }
                        })
                    }
                </div>
            }

            if !is_game_over {
                <>
                <div class="flex justify-center">
                    <MistakeCounter mistakes={props.mistakes} />
                </div>
                <GameControls
                    selected_count={props.selected_words.len()}
                    {can_submit}
                    {can_shuffle}
                    is_submitting={props.is_submitting}
                    on_submit={props.on_submit.clone()}
                    on_deselect={props.on_deselect_all.clone()}
                    on_shuffle={props.on_shuffle.clone()}
                />
                </>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_follow_session_completion() {
        assert_eq!(control_state(false, 4, 16), (true, true));
        assert_eq!(control_state(false, 3, 16), (false, true));
        // Server ended the game with groups still on the board
        assert_eq!(control_state(true, 4, 8), (false, false));
    }
}
