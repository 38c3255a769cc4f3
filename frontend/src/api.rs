use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::window;

use crate::config::{api_url, get_api_base_url};
use shared::constants::{GAMES_ENDPOINT, GROUP_SIZE, HINT_ENDPOINT};
use shared::shared_connections_game::{
    AiHint, ApiErrorBody, GuessOutcome, GuessRequest, GuessResponse, HintRequest,
    StartGameRequest, StartGameResponse,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    Encode(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(&'static str),
}

impl ApiError {
    /// Text suitable for showing to the player.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please check your connection.".to_string(),
            ApiError::Status { status: 401, .. } | ApiError::Status { status: 403, .. } => {
                "Please log in to play.".to_string()
            }
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => "Server error. Please try again.".to_string(),
        }
    }
}

fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
        .or_else(|| window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item("token").ok().flatten()))
        .filter(|token| !token.is_empty())
}

fn error_message(status_text: &str, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.message())
        .unwrap_or_else(|_| status_text.to_string())
}

/// A correct result is only usable together with the category it revealed.
fn check_guess_response(response: GuessResponse) -> Result<GuessResponse, ApiError> {
    if response.result == GuessOutcome::Correct && response.category.is_none() {
        return Err(ApiError::MalformedResponse("correct guess without a category"));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&response.status_text(), &body);
        log::warn!("API request to {} failed with {}: {}", response.url(), status, message);
        return Err(ApiError::Status { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Thin client over the game API. Requests carry the stored bearer token,
/// when there is one.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: get_api_base_url(),
            token: get_auth_token(),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send<B, T>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn start_game(&self, puzzle_id: Option<String>) -> Result<StartGameResponse, ApiError> {
        let url = api_url(&self.base_url, GAMES_ENDPOINT);
        log::info!("Starting game at {}", url);
        let body = StartGameRequest { puzzle_id, date: None };
        self.send(Request::post(&url), &body).await
    }

    pub async fn submit_guess(&self, session_id: &str, words: &[String]) -> Result<GuessResponse, ApiError> {
        if words.len() != GROUP_SIZE {
            return Err(ApiError::Encode(format!("a guess needs {} words", GROUP_SIZE)));
        }
        let url = api_url(&self.base_url, &format!("{}/{}/guess", GAMES_ENDPOINT, session_id));
        let body = GuessRequest { words: words.to_vec() };
        let response: GuessResponse = self.send(Request::patch(&url), &body).await?;
        check_guess_response(response)
    }

    pub async fn get_hint(&self, session_id: &str, remaining_words: &[String]) -> Result<AiHint, ApiError> {
        let url = api_url(&self.base_url, HINT_ENDPOINT);
        let body = HintRequest {
            session_id: session_id.to_string(),
            remaining_words: remaining_words.to_vec(),
        };
        self.send(Request::post(&url), &body).await
    }
}
