use std::collections::HashMap;

use crate::config::IconSettings;
use crate::events::classify::TemporalStatus;

const PIN_SIZE: (f64, f64) = (28.0, 42.0);
const PIN_ANCHOR: (f64, f64) = (14.0, 42.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum PinStyle {
    Solid,
    Faded(f64),
    Dashed,
}

/// Everything Leaflet needs to draw one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub url: String,
    pub class_name: String,
    pub size: (f64, f64),
    pub anchor: (f64, f64),
}

impl MarkerIcon {
    fn pin(fill: &str, style: PinStyle, class_name: &str) -> Self {
        let (opacity, dash) = match style {
            PinStyle::Solid => (1.0, ""),
            PinStyle::Faded(opacity) => (opacity.clamp(0.0, 1.0), ""),
            PinStyle::Dashed => (1.0, " stroke-dasharray='3 2'"),
        };
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'>\
             <path fill='{fill}' fill-opacity='{opacity}' stroke='#ffffff' stroke-width='1.5'{dash} \
             d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/>\
             </svg>"
        );
        Self {
            url: format!("data:image/svg+xml,{}", urlencoding::encode(&svg)),
            class_name: class_name.to_string(),
            size: PIN_SIZE,
            anchor: PIN_ANCHOR,
        }
    }
}

/// Icons keyed by event type, with a default that always exists.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet {
    default: MarkerIcon,
    by_type: HashMap<String, MarkerIcon>,
}

impl IconSet {
    pub fn new(default: MarkerIcon) -> Self {
        Self {
            default,
            by_type: HashMap::new(),
        }
    }

    pub fn with_type(mut self, event_type: impl Into<String>, icon: MarkerIcon) -> Self {
        self.by_type.insert(event_type.into(), icon);
        self
    }

    /// Icon configured for `event_type`, or the default when the type is unknown.
    pub fn lookup(&self, event_type: &str) -> &MarkerIcon {
        self.by_type.get(event_type).unwrap_or(&self.default)
    }

    pub fn default_icon(&self) -> &MarkerIcon {
        &self.default
    }
}

/// One icon set per temporal status, all keyed by the same event types.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcons {
    pub upcoming: IconSet,
    pub past: IconSet,
    pub undated: IconSet,
}

impl MarkerIcons {
    pub fn from_settings(settings: &IconSettings) -> Self {
        let build = |style: PinStyle, class_name: &str, fill_override: Option<&str>| -> IconSet {
            let fill_for = |fill: &str| fill_override.unwrap_or(fill).to_string();
            settings.types.iter().fold(
                IconSet::new(MarkerIcon::pin(
                    &fill_for(settings.default_fill.as_str()),
                    style,
                    class_name,
                )),
                |set, entry| {
                    set.with_type(
                        entry.event_type.clone(),
                        MarkerIcon::pin(&fill_for(entry.fill.as_str()), style, class_name),
                    )
                },
            )
        };

        Self {
            upcoming: build(PinStyle::Solid, settings.active_class.as_str(), None),
            past: build(
                PinStyle::Faded(settings.past_opacity),
                settings.past_class.as_str(),
                None,
            ),
            undated: build(
                PinStyle::Dashed,
                settings.undated_class.as_str(),
                Some(settings.undated_fill.as_str()),
            ),
        }
    }

    pub fn for_status(&self, status: TemporalStatus) -> &IconSet {
        match status {
            TemporalStatus::Upcoming => &self.upcoming,
            TemporalStatus::Past => &self.past,
            TemporalStatus::Unknown => &self.undated,
        }
    }

    pub fn select(&self, status: TemporalStatus, event_type: &str) -> &MarkerIcon {
        self.for_status(status).lookup(event_type)
    }
}
