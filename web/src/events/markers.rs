use chrono::NaiveDate;
use shared_types::EventRecord;

use crate::config::{AppConfig, FormLinks, Strings};
use crate::events::bounds::BoundingBox;
use crate::events::classify::{classify, TemporalStatus};
use crate::events::icons::{MarkerIcon, MarkerIcons};
use crate::events::popup::{PopupContent, PopupInput};

/// A positioned, styled overlay for one plottable event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMarker {
    pub id: String,
    pub position: (f64, f64),
    pub status: TemporalStatus,
    pub icon: MarkerIcon,
    pub popup: PopupContent,
}

/// Everything a render pass needs besides the events themselves.
#[derive(Debug, Clone)]
pub struct ProjectionContext {
    pub today: NaiveDate,
    pub icons: MarkerIcons,
    pub strings: Strings,
    pub forms: FormLinks,
    pub primary_event_type: String,
    pub date_format: String,
}

impl ProjectionContext {
    pub fn from_config(config: &AppConfig, today: NaiveDate) -> Self {
        Self {
            today,
            icons: MarkerIcons::from_settings(&config.icons),
            strings: config.strings.clone(),
            forms: config.forms.clone(),
            primary_event_type: config.primary_event_type.clone(),
            date_format: config.date_format.clone(),
        }
    }

    fn project(&self, event: &EventRecord) -> Option<EventMarker> {
        let position = event.position()?;
        let status = classify(&event.fields.assembly_date, self.today);
        let popup = PopupContent::build(&PopupInput {
            fields: &event.fields,
            status,
            primary_event_type: &self.primary_event_type,
            date_format: &self.date_format,
            forms: &self.forms,
            strings: &self.strings,
        });

        Some(EventMarker {
            id: event.id.clone(),
            position,
            status,
            icon: self.icons.select(status, &event.fields.event_type).clone(),
            popup,
        })
    }
}

/// Markers for every event with valid coordinates, in feed order.
pub fn project_markers(events: &[EventRecord], ctx: &ProjectionContext) -> Vec<EventMarker> {
    events.iter().filter_map(|event| ctx.project(event)).collect()
}

/// Result of one render pass over the current event list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapScene {
    pub markers: Vec<EventMarker>,
    pub bounds: BoundingBox,
}

impl MapScene {
    pub fn build(events: &[EventRecord], ctx: &ProjectionContext) -> Self {
        Self {
            markers: project_markers(events, ctx),
            bounds: BoundingBox::from_events(events),
        }
    }
}
