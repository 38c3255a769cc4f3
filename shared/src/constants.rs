pub const API_PREFIX: &str = "/api/v1";
pub const GAMES_ENDPOINT: &str = "/games";
pub const HINT_ENDPOINT: &str = "/ai/hint";

pub const GROUP_SIZE: usize = 4;
pub const CATEGORY_COUNT: usize = 4;
pub const MAX_MISTAKES: u32 = 4;
pub const MAX_HINTS: u32 = 3;

// UI timings, in milliseconds
pub const SHAKE_DURATION_MS: u32 = 500;
pub const RESULTS_DELAY_MS: u32 = 500;
pub const COPIED_RESET_MS: u32 = 2000;
pub const HIGHLIGHT_DURATION_MS: u32 = 3000;

pub const HINT_ERROR: &str = "Failed to get hint. Please try again.";
