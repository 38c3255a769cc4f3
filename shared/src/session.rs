use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{CATEGORY_COUNT, GROUP_SIZE, MAX_MISTAKES};
use crate::shared_connections_game::{
    Category, GuessOutcome, GuessRecord, GuessResponse, Puzzle, StartGameResponse,
};

/// Where a session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Active,
    Submitting,
    Won,
    Lost,
}

/// Everything that can change a [`GameSession`].
///
/// Variants carrying an `epoch` complete a request that was issued earlier.
/// They are dropped when the session has since been reset or restarted.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    StartRequested { epoch: u64 },
    Started { epoch: u64, response: StartGameResponse, started_at_ms: f64 },
    StartFailed { epoch: u64 },
    SelectWord(String),
    ClearSelection,
    Shuffle,
    GuessSubmitted { epoch: u64 },
    GuessResolved {
        epoch: u64,
        words: Vec<String>,
        response: GuessResponse,
        resolved_at_ms: f64,
    },
    GuessFailed { epoch: u64 },
    HintUsed { epoch: u64 },
    Reset { epoch: u64 },
}

impl GameAction {
    fn epoch(&self) -> Option<u64> {
        match self {
            GameAction::StartRequested { epoch }
            | GameAction::Reset { epoch }
            | GameAction::Started { epoch, .. }
            | GameAction::StartFailed { epoch }
            | GameAction::GuessSubmitted { epoch }
            | GameAction::GuessResolved { epoch, .. }
            | GameAction::GuessFailed { epoch }
            | GameAction::HintUsed { epoch } => Some(*epoch),
            GameAction::SelectWord(_) | GameAction::ClearSelection | GameAction::Shuffle => None,
        }
    }

    // Start and reset open a new epoch, everything else must match the current one.
    fn opens_epoch(&self) -> bool {
        matches!(self, GameAction::StartRequested { .. } | GameAction::Reset { .. })
    }
}

/// One attempt at one puzzle. Snapshots are immutable: every transition goes
/// through [`GameSession::apply`] and yields a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSession {
    epoch: u64,
    session_id: Option<String>,
    puzzle: Option<Puzzle>,
    remaining_words: Vec<String>,
    selected_words: Vec<String>,
    solved_categories: Vec<Category>,
    mistakes: u32,
    guesses: Vec<GuessRecord>,
    is_loading: bool,
    is_submitting: bool,
    is_complete: bool,
    is_won: bool,
    solve_time_ms: Option<u64>,
    used_ai_hint: bool,
    started_at_ms: Option<f64>,
}

fn elapsed_ms(started_at_ms: Option<f64>, now_ms: f64) -> Option<u64> {
    started_at_ms.map(|start| (now_ms - start).max(0.0).round() as u64)
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn remaining_words(&self) -> &[String] {
        &self.remaining_words
    }

    pub fn selected_words(&self) -> &[String] {
        &self.selected_words
    }

    pub fn solved_categories(&self) -> &[Category] {
        &self.solved_categories
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn solve_time_ms(&self) -> Option<u64> {
        self.solve_time_ms
    }

    pub fn used_ai_hint(&self) -> bool {
        self.used_ai_hint
    }

    pub fn has_session(&self) -> bool {
        self.session_id.is_some() && self.puzzle.is_some()
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selected_words.iter().any(|w| w == word)
    }

    /// True when the latest guess missed by a single word.
    pub fn last_guess_one_away(&self) -> bool {
        self.guesses.last().map_or(false, GuessRecord::is_one_away)
    }

    fn accepts_input(&self) -> bool {
        self.has_session() && !self.is_complete && !self.is_loading
    }

    /// Whether a guess may be sent right now.
    pub fn can_submit(&self) -> bool {
        self.accepts_input() && !self.is_submitting && self.selected_words.len() == GROUP_SIZE
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Loading
        } else if !self.has_session() {
            SessionPhase::Idle
        } else if self.is_complete && self.is_won {
            SessionPhase::Won
        } else if self.is_complete {
            SessionPhase::Lost
        } else if self.is_submitting {
            SessionPhase::Submitting
        } else {
            SessionPhase::Active
        }
    }

    /// Applies `action` and returns the next snapshot, shuffling with the
    /// thread-local generator.
    pub fn apply(&self, action: GameAction) -> GameSession {
        self.apply_with(action, &mut rand::thread_rng())
    }

    pub fn apply_with<R: Rng + ?Sized>(&self, action: GameAction, rng: &mut R) -> GameSession {
        if let Some(epoch) = action.epoch() {
            let stale = if action.opens_epoch() {
                epoch <= self.epoch
            } else {
                epoch != self.epoch
            };
            if stale {
                log::debug!("Dropping {} for epoch {}, session is at {}", action_name(&action), epoch, self.epoch);
                return self.clone();
            }
        }

        match action {
            GameAction::StartRequested { epoch } => GameSession {
                epoch,
                is_loading: true,
                is_submitting: false,
                ..self.clone()
            },
            GameAction::Started { epoch, response, started_at_ms } => {
                Self::from_start(epoch, response, started_at_ms)
            }
            GameAction::StartFailed { .. } => GameSession {
                is_loading: false,
                ..self.clone()
            },
            GameAction::SelectWord(word) => self.toggle_word(word),
            GameAction::ClearSelection => GameSession {
                selected_words: Vec::new(),
                ..self.clone()
            },
            GameAction::Shuffle => {
                if !self.accepts_input() || self.is_submitting {
                    return self.clone();
                }
                let mut next = self.clone();
                next.remaining_words.shuffle(rng);
                next
            }
            GameAction::GuessSubmitted { .. } => {
                if !self.can_submit() {
                    return self.clone();
                }
                GameSession {
                    is_submitting: true,
                    ..self.clone()
                }
            }
            GameAction::GuessResolved { words, response, resolved_at_ms, .. } => {
                self.resolve_guess(words, response, resolved_at_ms)
            }
            GameAction::GuessFailed { .. } => GameSession {
                is_submitting: false,
                ..self.clone()
            },
            GameAction::HintUsed { .. } => {
                if !self.has_session() {
                    return self.clone();
                }
                GameSession {
                    used_ai_hint: true,
                    ..self.clone()
                }
            }
            GameAction::Reset { epoch } => GameSession {
                epoch,
                ..GameSession::default()
            },
        }
    }

    fn from_start(epoch: u64, response: StartGameResponse, started_at_ms: f64) -> GameSession {
        let StartGameResponse { session_id, puzzle, game_state } = response;

        // A resumed server session only sends back the unsolved words, so the
        // solved groups and counters have to come along with them.
        let mistakes = game_state.mistakes.min(MAX_MISTAKES);
        let solved_categories: Vec<Category> = game_state
            .solved_categories
            .into_iter()
            .take(CATEGORY_COUNT)
            .collect();
        let remaining_words = puzzle
            .words
            .iter()
            .filter(|w| !solved_categories.iter().any(|c| c.contains(w)))
            .cloned()
            .collect();
        let is_won = solved_categories.len() == CATEGORY_COUNT;
        let is_complete = game_state.is_complete || is_won || mistakes >= MAX_MISTAKES;

        GameSession {
            epoch,
            session_id: Some(session_id),
            puzzle: Some(puzzle),
            remaining_words,
            solved_categories,
            mistakes,
            guesses: game_state.guesses,
            is_complete,
            is_won: is_complete && (is_won || game_state.is_won.unwrap_or(false)),
            solve_time_ms: if is_complete { game_state.solve_time_ms } else { None },
            started_at_ms: Some(started_at_ms),
            ..GameSession::default()
        }
    }

    fn toggle_word(&self, word: String) -> GameSession {
        if let Some(pos) = self.selected_words.iter().position(|w| *w == word) {
            let mut next = self.clone();
            next.selected_words.remove(pos);
            return next;
        }

        if !self.accepts_input()
            || self.is_submitting
            || self.selected_words.len() >= GROUP_SIZE
            || !self.remaining_words.contains(&word)
        {
            return self.clone();
        }

        let mut next = self.clone();
        next.selected_words.push(word);
        next
    }

    fn resolve_guess(&self, words: Vec<String>, response: GuessResponse, resolved_at_ms: f64) -> GameSession {
        let mut next = GameSession {
            is_submitting: false,
            ..self.clone()
        };
        if !self.has_session() || self.is_complete {
            return next;
        }

        match response.result {
            GuessOutcome::Correct => {
                let Some(category) = response.category else {
                    log::warn!("Correct guess without a category, ignoring it");
                    return next;
                };
                if next.solved_categories.iter().any(|c| c.id == category.id) {
                    log::warn!("Category {} was already solved, ignoring it", category.id);
                    return next;
                }

                next.remaining_words
                    .retain(|w| !words.contains(w) && !category.contains(w));
                next.selected_words.clear();
                next.guesses.push(GuessRecord {
                    words,
                    result: GuessOutcome::Correct,
                    one_away: None,
                    category: Some(category.clone()),
                });
                next.solved_categories.push(category);

                // The server decides completion here; a full board always wins.
                let all_solved = next.solved_categories.len() >= CATEGORY_COUNT;
                let state = response.game_state;
                next.is_complete = state.is_complete || all_solved;
                next.is_won = next.is_complete && (all_solved || state.is_won.unwrap_or(false));
                if next.is_complete {
                    next.solve_time_ms = state
                        .solve_time_ms
                        .or_else(|| elapsed_ms(self.started_at_ms, resolved_at_ms));
                }
            }
            GuessOutcome::Wrong => {
                next.selected_words.clear();
                next.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
                next.guesses.push(GuessRecord {
                    words,
                    result: GuessOutcome::Wrong,
                    one_away: response.one_away,
                    category: None,
                });

                // Completion on a miss is derived locally from the mistake count.
                next.is_complete = next.mistakes >= MAX_MISTAKES;
                next.is_won = false;
                if next.is_complete {
                    next.solve_time_ms = elapsed_ms(self.started_at_ms, resolved_at_ms);
                }
            }
        }

        next
    }
}

fn action_name(action: &GameAction) -> &'static str {
    match action {
        GameAction::StartRequested { .. } => "StartRequested",
        GameAction::Started { .. } => "Started",
        GameAction::StartFailed { .. } => "StartFailed",
        GameAction::SelectWord(_) => "SelectWord",
        GameAction::ClearSelection => "ClearSelection",
        GameAction::Shuffle => "Shuffle",
        GameAction::GuessSubmitted { .. } => "GuessSubmitted",
        GameAction::GuessResolved { .. } => "GuessResolved",
        GameAction::GuessFailed { .. } => "GuessFailed",
        GameAction::HintUsed { .. } => "HintUsed",
        GameAction::Reset { .. } => "Reset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_connections_game::{Difficulty, GameStateSnapshot};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const GROUPS: [(&str, Difficulty, [&str; 4]); 4] = [
        ("FISH", Difficulty::Yellow, ["BASS", "PIKE", "SOLE", "CARP"]),
        ("KEYS ON A KEYBOARD", Difficulty::Green, ["SHIFT", "ENTER", "SPACE", "TAB"]),
        ("PLANETS", Difficulty::Blue, ["MARS", "VENUS", "EARTH", "SATURN"]),
        ("___BALL", Difficulty::Purple, ["FOOT", "BASKET", "SNOW", "MEAT"]),
    ];

    fn category(index: usize) -> Category {
        let (name, difficulty, words) = GROUPS[index];
        Category {
            id: format!("cat-{index}"),
            name: name.to_string(),
            difficulty,
            words: words.iter().map(|w| w.to_string()).collect(),
            color: String::new(),
        }
    }

    fn all_words() -> Vec<String> {
        GROUPS
            .iter()
            .flat_map(|(_, _, words)| words.iter().map(|w| w.to_string()))
            .collect()
    }

    fn start_response() -> StartGameResponse {
        StartGameResponse {
            session_id: "session-1".into(),
            puzzle: Puzzle {
                id: "puzzle-1".into(),
                puzzle_number: 42,
                date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
                words: all_words(),
            },
            game_state: GameStateSnapshot::default(),
        }
    }

    fn started() -> GameSession {
        GameSession::new()
            .apply(GameAction::StartRequested { epoch: 1 })
            .apply(GameAction::Started { epoch: 1, response: start_response(), started_at_ms: 1_000.0 })
    }

    // Grades a guess the way the server does and reports the server's view.
    fn server_reply(session: &GameSession, words: &[String]) -> GuessResponse {
        let solved = session.solved_categories().len();
        let hit = (0..4).map(category).find(|c| {
            let guess: HashSet<&String> = words.iter().collect();
            let group: HashSet<&String> = c.words.iter().collect();
            guess == group
        });
        let one_away = hit.is_none()
            && (0..4)
                .map(category)
                .any(|c| words.iter().filter(|w| c.contains(w)).count() == 3);
        let mistakes = session.mistakes() + u32::from(hit.is_none());
        let won = hit.is_some() && solved + 1 == 4;
        let lost = mistakes >= 4;
        GuessResponse {
            result: if hit.is_some() { GuessOutcome::Correct } else { GuessOutcome::Wrong },
            one_away: if hit.is_some() { None } else { Some(one_away) },
            category: hit,
            game_state: GameStateSnapshot {
                mistakes,
                is_complete: won || lost,
                is_won: if won { Some(true) } else if lost { Some(false) } else { None },
                solve_time_ms: if won || lost { Some(90_000) } else { None },
                ..GameStateSnapshot::default()
            },
        }
    }

    fn guess(session: &GameSession, words: &[&str]) -> GameSession {
        let mut next = session.apply(GameAction::ClearSelection);
        for word in words {
            next = next.apply(GameAction::SelectWord(word.to_string()));
        }
        let epoch = next.epoch();
        let next = next.apply(GameAction::GuessSubmitted { epoch });
        assert!(next.is_submitting(), "guess should be in flight");
        let submitted = next.selected_words().to_vec();
        let response = server_reply(&next, &submitted);
        next.apply(GameAction::GuessResolved { epoch, words: submitted, response, resolved_at_ms: 61_000.0 })
    }

    fn group(index: usize) -> Vec<&'static str> {
        GROUPS[index].2.to_vec()
    }

    const WRONG: [&str; 4] = ["BASS", "SHIFT", "MARS", "FOOT"];

    #[test]
    fn test_start_seeds_fresh_session() {
        let session = started();
        assert_eq!(session.phase(), SessionPhase::Active);
        assert_eq!(session.session_id(), Some("session-1"));
        assert_eq!(session.remaining_words().len(), 16);
        assert_eq!(session.mistakes(), 0);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn test_start_failure_clears_loading_and_keeps_prior_state() {
        let session = started();
        let loading = session.apply(GameAction::StartRequested { epoch: 2 });
        assert_eq!(loading.phase(), SessionPhase::Loading);
        let failed = loading.apply(GameAction::StartFailed { epoch: 2 });
        assert!(!failed.is_loading());
        assert_eq!(failed.session_id(), Some("session-1"));
        assert_eq!(failed.remaining_words(), session.remaining_words());
    }

    #[test]
    fn test_selection_is_capped_at_four_without_duplicates() {
        let mut session = started();
        let words = all_words();
        let picks = [0, 1, 1, 2, 3, 4, 5, 0, 6, 7, 7, 8, 2, 9];
        for &i in picks.iter() {
            session = session.apply(GameAction::SelectWord(words[i].clone()));
            let selected = session.selected_words();
            assert!(selected.len() <= 4);
            let unique: HashSet<&String> = selected.iter().collect();
            assert_eq!(unique.len(), selected.len());
            assert!(selected.iter().all(|w| session.remaining_words().contains(w)));
        }
    }

    #[test]
    fn test_fifth_selection_is_ignored_but_deselect_works() {
        let mut session = started();
        for word in group(0) {
            session = session.apply(GameAction::SelectWord(word.into()));
        }
        let full = session.apply(GameAction::SelectWord("TAB".into()));
        assert_eq!(full.selected_words(), session.selected_words());

        let fewer = full.apply(GameAction::SelectWord("PIKE".into()));
        assert_eq!(fewer.selected_words().len(), 3);
        assert!(!fewer.is_selected("PIKE"));
    }

    #[test]
    fn test_unknown_word_cannot_be_selected() {
        let session = started().apply(GameAction::SelectWord("NOT A WORD".into()));
        assert!(session.selected_words().is_empty());
    }

    #[test]
    fn test_clear_selection_empties_everything() {
        let session = started()
            .apply(GameAction::SelectWord("BASS".into()))
            .apply(GameAction::SelectWord("TAB".into()))
            .apply(GameAction::ClearSelection);
        assert!(session.selected_words().is_empty());
    }

    #[test]
    fn test_submit_requires_exactly_four() {
        let session = started()
            .apply(GameAction::SelectWord("BASS".into()))
            .apply(GameAction::SelectWord("PIKE".into()));
        assert!(!session.can_submit());
        let epoch = session.epoch();
        let after = session.apply(GameAction::GuessSubmitted { epoch });
        assert!(!after.is_submitting());
    }

    #[test]
    fn test_second_submission_is_refused_while_in_flight() {
        let mut session = started();
        for word in group(0) {
            session = session.apply(GameAction::SelectWord(word.into()));
        }
        let epoch = session.epoch();
        let pending = session.apply(GameAction::GuessSubmitted { epoch });
        assert_eq!(pending.phase(), SessionPhase::Submitting);
        assert!(!pending.can_submit());
        // Tiles are locked while a guess is pending.
        let toggled = pending.apply(GameAction::SelectWord("TAB".into()));
        assert_eq!(toggled.selected_words().len(), 4);
    }

    #[test]
    fn test_correct_guess_solves_one_category() {
        let session = guess(&started(), &group(0));
        assert_eq!(session.mistakes(), 0);
        assert_eq!(session.solved_categories().len(), 1);
        for word in group(0) {
            assert!(!session.remaining_words().iter().any(|w| w == word));
        }
        assert!(session.selected_words().is_empty());
        assert_eq!(session.guesses().len(), 1);
        assert_eq!(session.guesses()[0].result, GuessOutcome::Correct);
        assert!(!session.is_complete());
        assert_eq!(session.solve_time_ms(), None);
    }

    #[test]
    fn test_remaining_and_solved_partition_the_puzzle() {
        let mut session = started();
        for index in [2, 0] {
            session = guess(&session, &group(index));
            session = guess(&session, &["SHIFT", "ENTER", "FOOT", "BASKET"]);

            let mut seen: Vec<String> = session.remaining_words().to_vec();
            for category in session.solved_categories() {
                seen.extend(category.words.iter().cloned());
            }
            let unique: HashSet<&String> = seen.iter().collect();
            assert_eq!(seen.len(), 16);
            assert_eq!(unique.len(), 16);
            let mut expected = all_words();
            expected.sort();
            seen.sort();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_wrong_guesses_count_mistakes() {
        let mut session = started();
        for n in 1..=3 {
            session = guess(&session, &WRONG);
            assert_eq!(session.mistakes(), n);
            assert!(!session.is_complete());
        }
        assert_eq!(session.guesses().len(), 3);
    }

    #[test]
    fn test_four_wrong_guesses_lose_the_game() {
        let mut session = started();
        for _ in 0..4 {
            session = guess(&session, &WRONG);
        }
        assert_eq!(session.mistakes(), 4);
        assert!(session.is_complete());
        assert!(!session.is_won());
        assert!(session.solved_categories().is_empty());
        assert_eq!(session.phase(), SessionPhase::Lost);
        // Locally measured from the recorded start.
        assert_eq!(session.solve_time_ms(), Some(60_000));

        // A fifth guess cannot even be selected.
        let after = session.apply(GameAction::SelectWord("BASS".into()));
        assert!(after.selected_words().is_empty());
        assert!(!after.can_submit());
    }

    #[test]
    fn test_solving_all_groups_wins_with_server_time() {
        let mut session = guess(&started(), &WRONG);
        for index in 0..4 {
            session = guess(&session, &group(index));
        }
        assert!(session.is_complete());
        assert!(session.is_won());
        assert_eq!(session.mistakes(), 1);
        assert!(session.remaining_words().is_empty());
        assert_eq!(session.solve_time_ms(), Some(90_000));
        assert_eq!(session.guesses().len(), 5);
    }

    #[test]
    fn test_completion_source_differs_between_paths() {
        // On a hit the server's flag is adopted even before the board is full.
        let mut session = started();
        for word in group(1) {
            session = session.apply(GameAction::SelectWord(word.into()));
        }
        let epoch = session.epoch();
        let session = session.apply(GameAction::GuessSubmitted { epoch });
        let mut response = server_reply(&session, session.selected_words());
        response.game_state.is_complete = true;
        response.game_state.is_won = Some(false);
        response.game_state.solve_time_ms = Some(5_000);
        let words = session.selected_words().to_vec();
        let ended = session.apply(GameAction::GuessResolved { epoch, words, response, resolved_at_ms: 2_000.0 });
        assert!(ended.is_complete());
        assert!(!ended.is_won());
        assert_eq!(ended.solve_time_ms(), Some(5_000));

        // On a miss the server's flag is ignored and the mistake count decides.
        let mut session = started();
        for word in WRONG {
            session = session.apply(GameAction::SelectWord(word.into()));
        }
        let epoch = session.epoch();
        let session = session.apply(GameAction::GuessSubmitted { epoch });
        let mut response = server_reply(&session, session.selected_words());
        response.game_state.is_complete = true;
        let words = session.selected_words().to_vec();
        let missed = session.apply(GameAction::GuessResolved { epoch, words, response, resolved_at_ms: 2_000.0 });
        assert!(!missed.is_complete());
        assert_eq!(missed.mistakes(), 1);
    }

    #[test]
    fn test_one_away_is_carried_into_history() {
        let session = guess(&started(), &["BASS", "PIKE", "SOLE", "TAB"]);
        assert!(session.last_guess_one_away());
        let session = guess(&session, &WRONG);
        assert!(!session.last_guess_one_away());
    }

    #[test]
    fn test_failed_guess_only_clears_in_flight_flag() {
        let mut session = started();
        for word in group(0) {
            session = session.apply(GameAction::SelectWord(word.into()));
        }
        let epoch = session.epoch();
        let pending = session.apply(GameAction::GuessSubmitted { epoch });
        let failed = pending.apply(GameAction::GuessFailed { epoch });
        assert_eq!(failed, session);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut session = guess(&started(), &group(0));
        session = guess(&session, &group(1));
        assert_eq!(session.remaining_words().len(), 8);
        session = session.apply(GameAction::SelectWord("MARS".into()));

        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = session.apply_with(GameAction::Shuffle, &mut rng);
        let mut before = session.remaining_words().to_vec();
        let mut after = shuffled.remaining_words().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(shuffled.selected_words(), session.selected_words());
        assert_eq!(shuffled.solved_categories(), session.solved_categories());
    }

    #[test]
    fn test_shuffle_is_ignored_unless_playing() {
        let mut lost = started();
        for _ in 0..4 {
            lost = guess(&lost, &WRONG);
        }
        assert!(lost.is_complete());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(lost.apply_with(GameAction::Shuffle, &mut rng), lost);

        let loading = started().apply(GameAction::StartRequested { epoch: 2 });
        assert_eq!(loading.apply_with(GameAction::Shuffle, &mut rng), loading);

        let mut pending = started();
        for word in WRONG {
            pending = pending.apply(GameAction::SelectWord(word.to_string()));
        }
        let pending = pending.apply(GameAction::GuessSubmitted { epoch: 1 });
        assert!(pending.is_submitting());
        assert_eq!(pending.apply_with(GameAction::Shuffle, &mut rng), pending);
    }

    #[test]
    fn test_hint_flag_is_sticky() {
        let session = started();
        let hinted = session.apply(GameAction::HintUsed { epoch: 1 });
        assert!(hinted.used_ai_hint());
        let later = guess(&hinted, &WRONG);
        assert!(later.used_ai_hint());
    }

    #[test]
    fn test_reset_makes_mutations_noops() {
        let session = guess(&started(), &group(0)).apply(GameAction::Reset { epoch: 2 });
        assert_eq!(session.phase(), SessionPhase::Idle);

        let mutations = vec![
            GameAction::SelectWord("TAB".into()),
            GameAction::ClearSelection,
            GameAction::Shuffle,
            GameAction::GuessSubmitted { epoch: 2 },
            GameAction::HintUsed { epoch: 2 },
        ];
        for action in mutations {
            assert_eq!(session.apply(action), session);
        }
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        let mut session = started();
        for word in group(0) {
            session = session.apply(GameAction::SelectWord(word.into()));
        }
        let pending = session.apply(GameAction::GuessSubmitted { epoch: 1 });
        let response = server_reply(&pending, pending.selected_words());
        let words = pending.selected_words().to_vec();

        // The player restarts before the guess comes back.
        let restarted = pending
            .apply(GameAction::StartRequested { epoch: 2 })
            .apply(GameAction::Started { epoch: 2, response: start_response(), started_at_ms: 5_000.0 });
        let late = restarted.apply(GameAction::GuessResolved { epoch: 1, words, response, resolved_at_ms: 6_000.0 });
        assert_eq!(late, restarted);
        assert!(late.solved_categories().is_empty());

        // A puzzle load that resolves after a reset is ignored too.
        let reset = restarted
            .apply(GameAction::StartRequested { epoch: 3 })
            .apply(GameAction::Reset { epoch: 4 });
        let late_load = reset.apply(GameAction::Started { epoch: 3, response: start_response(), started_at_ms: 0.0 });
        assert_eq!(late_load.phase(), SessionPhase::Idle);
        let late_hint = reset.apply(GameAction::HintUsed { epoch: 3 });
        assert!(!late_hint.used_ai_hint());
    }

    #[test]
    fn test_resumed_session_keeps_partition() {
        let mut response = start_response();
        response.puzzle.words = all_words()[4..].to_vec();
        response.game_state = GameStateSnapshot {
            solved_categories: vec![category(0)],
            mistakes: 2,
            ..GameStateSnapshot::default()
        };
        let session = GameSession::new().apply(GameAction::Started { epoch: 0, response, started_at_ms: 0.0 });
        assert_eq!(session.remaining_words().len(), 12);
        assert_eq!(session.solved_categories().len(), 1);
        assert_eq!(session.mistakes(), 2);
        assert_eq!(session.phase(), SessionPhase::Active);
    }
}
