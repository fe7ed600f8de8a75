//! Client for the remote events table. Server-side only: the browser never
//! talks to the tabular API directly.

use reqwest::Client;
use shared_types::{EventFeed, EventFeedPayload};
use std::env;

const DEFAULT_EVENTS_API_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("events API answered with status {0}")]
    Status(u16),
    #[error("malformed events payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn events_api_url() -> String {
    env::var("EVENTS_API_URL").unwrap_or_else(|_| DEFAULT_EVENTS_API_URL.to_string())
}

/// One unconditional GET of the whole event table.
pub async fn load_event_feed(client: &Client, url: &str) -> Result<EventFeed, FeedError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FeedError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    let payload: EventFeedPayload = serde_json::from_str(&body)?;
    tracing::debug!(
        events = payload.map.data.len(),
        updated_at = ?payload.updated_at,
        "loaded event feed"
    );
    Ok(payload.into())
}
