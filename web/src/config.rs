//! Static map configuration and the localized string table.
//!
//! Both documents are embedded at compile time so the server render and the
//! hydrated client always agree on icons, labels and form links.

use serde::{Deserialize, Serialize};

const CONFIG_JSON: &str = include_str!("../config.json");
const STRINGS_JSON: &str = include_str!("../locales/fr.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid map configuration: {0}")]
    Config(#[source] serde_json::Error),
    #[error("invalid string table: {0}")]
    Strings(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub body_class: String,
    pub primary_event_type: String,
    pub date_format: String,
    pub timestamp_format: String,
    pub map: MapSettings,
    pub forms: FormLinks,
    pub icons: IconSettings,
    #[serde(skip)]
    pub strings: Strings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapSettings {
    /// `[lat, lon]` used until the first feed with plottable events arrives.
    pub center: (f64, f64),
    pub zoom: f64,
    pub height: String,
    pub tile_url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormLinks {
    pub contact_url: String,
    pub registration_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconSettings {
    pub default_fill: String,
    pub undated_fill: String,
    pub past_opacity: f64,
    pub active_class: String,
    pub past_class: String,
    pub undated_class: String,
    #[serde(default)]
    pub types: Vec<TypeIcon>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeIcon {
    pub event_type: String,
    pub fill: String,
}

/// Every user-facing label. Nothing outside this table is displayed verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Strings {
    pub page_title: String,
    pub badge_public: String,
    pub badge_private: String,
    pub view_event: String,
    pub ticketing: String,
    pub contact: String,
    pub register: String,
    pub remaining_seats: String,
    pub last_updated: String,
    pub legend_title: String,
    pub legend_past: String,
    pub legend_upcoming: String,
    pub legend_type: String,
    pub legend_default: String,
    pub legend_undated: String,
    pub legend_back: String,
    pub icon_alt: String,
    pub not_found: String,
}

impl AppConfig {
    /// Parses the configuration and string table bundled with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(CONFIG_JSON, STRINGS_JSON)
    }

    pub fn from_json(config: &str, strings: &str) -> Result<Self, ConfigError> {
        let mut parsed: AppConfig = serde_json::from_str(config).map_err(ConfigError::Config)?;
        parsed.strings = serde_json::from_str(strings).map_err(ConfigError::Strings)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_documents_parse() {
        let config = AppConfig::embedded().expect("bundled config should parse");
        assert_eq!(config.primary_event_type, "Assemblée de cuisine");
        assert_eq!(config.map.center, (46.7, -71.4));
        assert!(config
            .icons
            .types
            .iter()
            .any(|icon| icon.event_type == config.primary_event_type));
        assert_eq!(config.strings.badge_public, "Publique");
        assert!(!config.strings.last_updated.is_empty());
    }

    #[test]
    fn reports_which_document_is_broken() {
        let err = AppConfig::from_json(CONFIG_JSON, "{").unwrap_err();
        assert!(matches!(err, ConfigError::Strings(_)));

        let err = AppConfig::from_json("[]", STRINGS_JSON).unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }
}
