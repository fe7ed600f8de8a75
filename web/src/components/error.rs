use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent, MessageBarTitle};

use crate::config::ConfigError;

/// Rendered instead of the app when a bundled document fails to parse; the
/// string table may be the broken one, so nothing here is localized.
#[component]
pub fn ConfigErrorView(error: ConfigError) -> impl IntoView {
    let document = match &error {
        ConfigError::Config(_) => "config.json",
        ConfigError::Strings(_) => "locales/fr.json",
    };

    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>
                <MessageBarTitle>{document}</MessageBarTitle>
                {error.to_string()}
            </MessageBarBody>
        </MessageBar>
    }
}
