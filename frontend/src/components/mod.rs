pub mod button;
pub mod category_row;
pub mod game_board;
pub mod game_controls;
pub mod header;
pub mod hint_panel;
pub mod mistake_counter;
pub mod results_modal;
pub mod word_tile;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use category_row::CategoryRow;
pub use game_board::GameBoard;
pub use game_controls::GameControls;
pub use header::Header;
pub use hint_panel::HintPanel;
pub use mistake_counter::MistakeCounter;
pub use results_modal::ResultsModal;
pub use word_tile::WordTile;
