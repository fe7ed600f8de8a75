use leptos::prelude::*;
use leptos::server;
use shared_types::EventFeed;

#[cfg(feature = "ssr")]
use crate::events_api::{events_api_url, load_event_feed};

#[server]
pub async fn fetch_event_feed() -> Result<EventFeed, ServerFnError> {
    let url = events_api_url();
    match load_event_feed(&reqwest::Client::new(), &url).await {
        Ok(feed) => Ok(feed),
        Err(e) => {
            tracing::warn!(error = %e, %url, "failed to fetch event feed");
            Err(ServerFnError::new(format!("Events API error: {}", e)))
        }
    }
}
