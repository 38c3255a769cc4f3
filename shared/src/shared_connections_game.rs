use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Difficulty tier of a category, easiest first. Sent over the wire as 0..=3.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Yellow,
        Difficulty::Green,
        Difficulty::Blue,
        Difficulty::Purple,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Difficulty::Yellow => "🟨",
            Difficulty::Green => "🟩",
            Difficulty::Blue => "🟦",
            Difficulty::Purple => "🟪",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDifficulty(pub u8);

impl fmt::Display for InvalidDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "difficulty must be between 0 and 3, got {}", self.0)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = InvalidDifficulty;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidDifficulty(value))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty as u8
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub words: Vec<String>,
    // Hex color chosen by the server, informational only
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// A puzzle as the client sees it before solving: the words, never the groups.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Puzzle {
    pub id: String,
    pub puzzle_number: u32,
    pub date: NaiveDate,
    pub words: Vec<String>,
}

impl Puzzle {
    /// Long form used in the page header, e.g. "Friday, October 16, 2026".
    pub fn display_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GuessOutcome {
    Correct,
    Wrong,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessRecord {
    pub words: Vec<String>,
    pub result: GuessOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_away: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl GuessRecord {
    pub fn is_one_away(&self) -> bool {
        self.result == GuessOutcome::Wrong && self.one_away.unwrap_or(false)
    }
}

/// Server-side view of a session, returned alongside every game response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GameStateSnapshot {
    #[serde(default)]
    pub remaining_words: Vec<String>,
    #[serde(default)]
    pub solved_categories: Vec<Category>,
    #[serde(default)]
    pub mistakes: u32,
    #[serde(default)]
    pub guesses: Vec<GuessRecord>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub is_won: Option<bool>,
    #[serde(default)]
    pub solve_time_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StartGameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puzzle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartGameResponse {
    pub session_id: String,
    pub puzzle: Puzzle,
    #[serde(default)]
    pub game_state: GameStateSnapshot,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessRequest {
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessResponse {
    pub result: GuessOutcome,
    #[serde(default)]
    pub one_away: Option<bool>,
    #[serde(default)]
    pub category: Option<Category>,
    pub game_state: GameStateSnapshot,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HintRequest {
    pub session_id: String,
    pub remaining_words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AiHint {
    pub hint: String,
    pub confidence: f32,
    #[serde(default)]
    pub suggested_words: Vec<String>,
}

impl AiHint {
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Error payload of the API. `detail` is a string for handled errors and a
/// list of field errors for request validation failures.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub detail: Value,
}

impl ApiErrorBody {
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}
