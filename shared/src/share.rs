use crate::session::GameSession;
use crate::shared_connections_game::{Category, GuessRecord};

const UNKNOWN_TILE: &str = "⬜";

/// Formats a duration as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn tile_for(word: &str, guess: &GuessRecord, solved: &[Category]) -> &'static str {
    guess
        .category
        .iter()
        .chain(solved.iter())
        .find(|category| category.contains(word))
        .map_or(UNKNOWN_TILE, |category| category.difficulty.emoji())
}

/// One emoji row per guess, colored by the solved group each word belongs to.
/// Words from groups that were never solved stay blank.
pub fn guess_grid(guesses: &[GuessRecord], solved: &[Category]) -> Vec<String> {
    guesses
        .iter()
        .map(|guess| {
            guess
                .words
                .iter()
                .map(|word| tile_for(word, guess, solved))
                .collect::<String>()
        })
        .collect()
}

/// Text copied to the clipboard from the results screen. `None` until a
/// puzzle has been loaded.
pub fn share_text(session: &GameSession) -> Option<String> {
    let puzzle = session.puzzle()?;

    let mut lines = vec![format!("Connections AI #{}", puzzle.puzzle_number)];
    lines.extend(guess_grid(session.guesses(), session.solved_categories()));

    let outcome = if session.is_won() {
        match session.mistakes() {
            0 => "Perfect solve!".to_string(),
            1 => "Solved with 1 mistake".to_string(),
            n => format!("Solved with {} mistakes", n),
        }
    } else {
        "Not solved".to_string()
    };
    lines.push(String::new());
    lines.push(outcome);
    if session.used_ai_hint() {
        lines.push("🤖 AI hint used".to_string());
    }

    Some(lines.join("\n"))
}
