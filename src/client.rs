use log::{debug, warn};
use reqwest::StatusCode;

use crate::config::Config;
use crate::models::{CreateOutcome, NewWarble, ToggleOutcome, WarbleId};

const LIKE_ADDED: &str = "like added";
const LIKE_REMOVED: &str = "like removed";
const WARBLE_CREATED: &str = "message created";

/// A client for a warble server. Each operation issues a single request and
/// reports a tagged outcome; the acting user is whoever the server's session
/// says it is, so no credentials travel with individual calls.
///
/// Operations never return `Err`. Transport failures and responses the
/// client doesn't recognize are normalized into the failure tag of the
/// relevant outcome, which keeps the calling layer to a plain match on the
/// result.
pub struct WarbleClient {
    http: reqwest::Client,
    base_url: String,
}

impl WarbleClient {
    /// - base_url: Root of the warble server, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        WarbleClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server_url.clone())
    }

    /// Asks the server to flip the like relation between the current user
    /// and the given warble, reporting which way the toggle went.
    ///
    /// Repeated calls for one warble alternate between `LikeAdded` and
    /// `LikeRemoved`; the server owns that state and the client trusts the
    /// tag it sends back.
    pub async fn toggle_like(&self, warble: &WarbleId) -> ToggleOutcome {
        let url = format!("{}/users/add_like/{}", self.base_url, warble);
        let response = match self.http.post(&url).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!("Like toggle for warble {warble} failed to send: {error}");
                return ToggleOutcome::RequestFailed;
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!("Like toggle for warble {warble} lost its response body: {error}");
                return ToggleOutcome::RequestFailed;
            }
        };

        let outcome = classify_toggle(status, &body);
        debug!("Like toggle for warble {warble}: {status}, {outcome:?}");
        outcome
    }

    /// Submits new warble text for creation. The text is sent verbatim,
    /// empty or not; length rules belong to the server.
    pub async fn create_warble(&self, text: impl Into<String>) -> CreateOutcome {
        let url = format!("{}/messages/new", self.base_url);
        let payload = NewWarble { text: text.into() };
        let response = match self.http.post(&url).json(&payload).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!("Warble creation failed to send: {error}");
                return CreateOutcome::Failed;
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!("Warble creation lost its response body: {error}");
                return CreateOutcome::Failed;
            }
        };

        let outcome = classify_create(status, &body);
        debug!("Warble creation: {status}, {outcome:?}");
        outcome
    }
}

// The server answers with a JSON-encoded string discriminator, e.g.
// `"like added"`. The body is decoded as JSON rather than compared as raw
// bytes; anything that is not a JSON string matches no marker.
fn decode_marker(body: &str) -> Option<String> {
    serde_json::from_str::<String>(body).ok()
}

fn classify_toggle(status: StatusCode, body: &str) -> ToggleOutcome {
    if !status.is_success() {
        return ToggleOutcome::RequestFailed;
    }
    match decode_marker(body).as_deref() {
        Some(LIKE_ADDED) => ToggleOutcome::LikeAdded,
        Some(LIKE_REMOVED) => ToggleOutcome::LikeRemoved,
        _ => ToggleOutcome::RequestFailed,
    }
}

fn classify_create(status: StatusCode, body: &str) -> CreateOutcome {
    if !status.is_success() {
        return CreateOutcome::Failed;
    }
    match decode_marker(body).as_deref() {
        Some(WARBLE_CREATED) => CreateOutcome::Created,
        _ => CreateOutcome::Failed,
    }
}
