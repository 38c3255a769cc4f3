use yew::prelude::*;

use crate::styles::{ANIMATE_SHAKE, TILE_BASE, TILE_DISABLED, TILE_IDLE, TILE_SELECTED};

pub fn tile_classes(is_selected: bool, is_disabled: bool, is_shaking: bool) -> Classes {
    let mut classes = classes!(TILE_BASE);
    if is_selected {
        classes.push(TILE_SELECTED);
    } else if !is_disabled {
        classes.push(TILE_IDLE);
    }
    if is_disabled {
        classes.push(TILE_DISABLED);
    }
    if is_shaking {
        classes.push(ANIMATE_SHAKE);
    }
    classes
}

#[derive(Properties, PartialEq)]
pub struct WordTileProps {
    pub word: String,
    pub is_selected: bool,
    pub is_disabled: bool,
    #[prop_or(false)]
    pub is_shaking: bool,
    pub on_click: Callback<String>,
}

#[function_component(WordTile)]
pub fn word_tile(props: &WordTileProps) -> Html {
    let onclick = {
        let word = props.word.clone();
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(word.clone()))
    };

    html! {
        <button
            type="button"
            class={tile_classes(props.is_selected, props.is_disabled, props.is_shaking)}
            disabled={props.is_disabled}
            {onclick}
        >
            { &props.word }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_classes() {
        let idle = tile_classes(false, false, false).to_string();
        assert!(idle.contains("hover:bg-gray-300"));

        let locked = tile_classes(true, true, true).to_string();
        assert!(locked.contains("cursor-not-allowed"));
        assert!(locked.contains("animate-shake"));
        assert!(!locked.contains("hover:bg-gray-300"));
    }
}
