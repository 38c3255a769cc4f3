pub mod use_game;
pub mod use_transient;

pub use use_game::{use_game, UseGameHandle};
pub use use_transient::{use_transient, TransientHandle};
