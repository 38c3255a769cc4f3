use std::cell::RefCell;
use std::future::Future;
use std::ops::Deref;
use std::rc::Rc;

use shared::constants::SHAKE_DURATION_MS;
use shared::shared_connections_game::{AiHint, GuessOutcome};
use shared::{GameAction, GameSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::hooks::use_transient::{use_transient, TransientHandle};

/// Drops a hint that arrived after the session it was asked for was replaced.
fn keep_if_current<T>(value: T, issued_epoch: u64, current_epoch: u64) -> Option<T> {
    if issued_epoch == current_epoch {
        Some(value)
    } else {
        log::debug!("Dropping result for epoch {}, session is at {}", issued_epoch, current_epoch);
        None
    }
}

#[derive(PartialEq, Default)]
pub struct SessionState(GameSession);

impl Reducible for SessionState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: GameAction) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(SessionState(next))
        }
    }
}

/// Handle to the active game. Derefs to the current [`GameSession`] snapshot;
/// the methods issue API calls and feed their outcome back into the reducer.
#[derive(Clone)]
pub struct UseGameHandle {
    state: UseReducerHandle<SessionState>,
    epoch: Rc<RefCell<u64>>,
    in_flight: Rc<RefCell<bool>>,
    shaking: TransientHandle<Vec<String>>,
}

impl Deref for UseGameHandle {
    type Target = GameSession;

    fn deref(&self) -> &GameSession {
        &self.state.0
    }
}

impl UseGameHandle {
    fn next_epoch(&self) -> u64 {
        let mut epoch = self.epoch.borrow_mut();
        *epoch += 1;
        *epoch
    }

    /// Epoch of the session currently on screen. Bumped by every start and reset.
    pub fn current_epoch(&self) -> u64 {
        *self.epoch.borrow()
    }

    /// Words of the last wrong guess, while they are shaking.
    pub fn shaking_words(&self) -> &[String] {
        &self.shaking
    }

    /// Loads a puzzle (today's when `puzzle_id` is `None`) into a brand new
    /// session. Errors are logged and handed back to the caller.
    pub fn start_game(&self, puzzle_id: Option<String>) -> impl Future<Output = Result<(), ApiError>> + 'static {
        let epoch = self.next_epoch();
        let dispatcher = self.state.dispatcher();
        *self.in_flight.borrow_mut() = false;
        self.shaking.clear();
        dispatcher.dispatch(GameAction::StartRequested { epoch });

        async move {
            match ApiClient::new().start_game(puzzle_id).await {
                Ok(response) => {
                    log::info!("Started puzzle #{} in session {}", response.puzzle.puzzle_number, response.session_id);
                    dispatcher.dispatch(GameAction::Started {
                        epoch,
                        response,
                        started_at_ms: js_sys::Date::now(),
                    });
                    Ok(())
                }
                Err(e) => {
                    log::error!("Failed to start game: {}", e);
                    dispatcher.dispatch(GameAction::StartFailed { epoch });
                    Err(e)
                }
            }
        }
    }

    pub fn select_word(&self, word: String) {
        self.state.dispatch(GameAction::SelectWord(word));
    }

    pub fn clear_selection(&self) {
        self.state.dispatch(GameAction::ClearSelection);
    }

    pub fn shuffle_words(&self) {
        self.state.dispatch(GameAction::Shuffle);
    }

    /// Sends the current selection. Ignored unless exactly four words are
    /// selected and no other guess is pending.
    pub fn submit_guess(&self) {
        if !self.can_submit() || *self.in_flight.borrow() {
            return;
        }
        let Some(session_id) = self.session_id().map(str::to_string) else {
            return;
        };

        let words = self.selected_words().to_vec();
        let epoch = self.current_epoch();
        let dispatcher = self.state.dispatcher();
        let epoch_ref = self.epoch.clone();
        let in_flight = self.in_flight.clone();
        let shaking = self.shaking.clone();

        *in_flight.borrow_mut() = true;
        dispatcher.dispatch(GameAction::GuessSubmitted { epoch });

        spawn_local(async move {
            let result = ApiClient::new().submit_guess(&session_id, &words).await;
            let is_current = *epoch_ref.borrow() == epoch;
            if is_current {
                *in_flight.borrow_mut() = false;
            }

            match result {
                Ok(response) => {
                    if is_current && response.result == GuessOutcome::Wrong {
                        shaking.show(words.clone());
                    }
                    dispatcher.dispatch(GameAction::GuessResolved {
                        epoch,
                        words,
                        response,
                        resolved_at_ms: js_sys::Date::now(),
                    });
                }
                Err(e) => {
                    log::error!("Failed to submit guess: {}", e);
                    dispatcher.dispatch(GameAction::GuessFailed { epoch });
                }
            }
        });
    }

    /// Asks the AI for a hint about the words still on the board. Resolves to
    /// `None` when there is no active session, the request fails, or a new
    /// game was started before the answer came back.
    pub fn get_hint(&self) -> impl Future<Output = Option<AiHint>> + 'static {
        let session_id = if self.is_complete() {
            None
        } else {
            self.session_id().map(str::to_string)
        };
        let remaining_words = self.remaining_words().to_vec();
        let epoch = self.current_epoch();
        let epoch_ref = self.epoch.clone();
        let dispatcher = self.state.dispatcher();

        async move {
            let session_id = session_id?;
            match ApiClient::new().get_hint(&session_id, &remaining_words).await {
                Ok(hint) => {
                    let hint = keep_if_current(hint, epoch, *epoch_ref.borrow())?;
                    dispatcher.dispatch(GameAction::HintUsed { epoch });
                    Some(hint)
                }
                Err(e) => {
                    log::error!("Failed to get hint: {}", e);
                    None
                }
            }
        }
    }

    pub fn reset_game(&self) {
        let epoch = self.next_epoch();
        *self.in_flight.borrow_mut() = false;
        self.shaking.clear();
        self.state.dispatch(GameAction::Reset { epoch });
    }
}

#[hook]
pub fn use_game() -> UseGameHandle {
    let state = use_reducer(SessionState::default);
    let epoch = use_mut_ref(|| 0u64);
    let in_flight = use_mut_ref(|| false);
    let shaking = use_transient::<Vec<String>>(SHAKE_DURATION_MS);

    UseGameHandle {
        state,
        epoch,
        in_flight,
        shaking,
    }
}
