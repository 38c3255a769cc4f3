use shared::shared_connections_game::Difficulty;

pub const PAGE: &str = "min-h-screen flex flex-col bg-white text-gray-900";
pub const MAIN: &str = "flex-1 py-8";
pub const CONTAINER: &str = "max-w-4xl mx-auto px-4";
pub const CENTERED: &str = "flex-1 flex items-center justify-center py-24";

pub const NAV: &str = "border-b border-gray-200 bg-white";
pub const NAV_INNER: &str = "max-w-4xl mx-auto px-4 py-4 flex items-center justify-between";
pub const NAV_BRAND: &str = "text-2xl font-bold tracking-tight";
pub const NAV_ITEMS: &str = "flex items-center gap-6";
pub const NAV_LINK: &str = "text-sm font-medium text-gray-600 hover:text-black transition-colors";

pub const TEXT_H2: &str = "text-2xl font-bold mb-2";
pub const TEXT_BODY: &str = "text-gray-600";
pub const TEXT_SMALL: &str = "text-sm text-gray-500";
pub const TEXT_ERROR: &str = "text-sm text-red-600";

pub const CARD_ERROR: &str = "bg-red-50 border border-red-200 rounded-lg p-4 text-red-700 text-center";
pub const LOADING_SPINNER: &str = "animate-spin h-8 w-8 border-4 border-gray-300 border-t-gray-800 rounded-full mx-auto mb-4";
pub const BADGE_ONE_AWAY: &str = "inline-block bg-yellow-100 text-yellow-800 px-4 py-2 rounded-full text-sm font-medium";

pub const BOARD: &str = "w-full max-w-lg mx-auto space-y-4";
pub const BOARD_GRID: &str = "grid grid-cols-4 gap-2";
pub const GAME_LAYOUT: &str = "grid gap-6 lg:grid-cols-[1fr_280px]";

pub const TILE_BASE: &str = "w-full aspect-[2/1] rounded-lg font-bold text-sm sm:text-base uppercase flex items-center justify-center text-center px-2 transition-all duration-150 ease-out focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-400";
pub const TILE_IDLE: &str = "bg-[#efefe6] text-black hover:bg-gray-300";
pub const TILE_SELECTED: &str = "bg-[#5a594e] text-white scale-[0.98]";
pub const TILE_DISABLED: &str = "opacity-50 cursor-not-allowed";
pub const ANIMATE_SHAKE: &str = "animate-shake";
pub const ANIMATE_BOUNCE_IN: &str = "animate-bounce-in";

pub const SLOT_FILLED: &str = "bg-gray-800";
pub const SLOT_EMPTY: &str = "bg-gray-300";

pub const PANEL: &str = "bg-gray-50 rounded-xl p-4 border border-gray-200";
pub const PANEL_CARD: &str = "bg-white rounded-lg p-3 border border-gray-200";

pub const MODAL_BACKDROP: &str = "absolute inset-0 bg-black/50";
pub const MODAL: &str = "relative bg-white rounded-2xl shadow-xl max-w-md w-full mx-4 p-6 animate-bounce-in";

/// Background and text classes for a solved group.
pub fn difficulty_classes(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Yellow => "bg-[#f9df6d] text-black",
        Difficulty::Green => "bg-[#a0c35a] text-black",
        Difficulty::Blue => "bg-[#b0c4ef] text-black",
        Difficulty::Purple => "bg-[#ba81c5] text-black",
    }
}

pub const APP_CSS: &str = r#"
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-5px); }
    75% { transform: translateX(5px); }
}

@keyframes bounceIn {
    0% { transform: scale(0.9); opacity: 0; }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); opacity: 1; }
}

.animate-shake {
    animation: shake 0.5s ease-in-out;
}

.animate-bounce-in {
    animation: bounceIn 0.3s ease-out;
}
"#;
