use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// One row of the events table, as served by the tabular data API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub fields: EventFields,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EventFields {
    #[serde(rename = "Nom de l'événement")]
    pub event_name: String,
    #[serde(rename = "Type d'événement")]
    pub event_type: String,
    #[serde(rename = "Date de l'Assemblée")]
    pub assembly_date: String,
    #[serde(rename = "Municipalité")]
    pub municipality: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// `None` when the column is absent, null or not a number.
    #[serde(rename = "Places restantes", deserialize_with = "lenient_seat_count")]
    pub remaining_seats: Option<u32>,
    #[serde(rename = "Action publique")]
    pub is_public_action: bool,
    #[serde(rename = "Lien de l'événement")]
    pub event_url: Option<String>,
    #[serde(rename = "Billetterie")]
    pub ticketing_url: Option<String>,
    #[serde(rename = "Courriel de confirmation fourni")]
    pub confirmed_email_provided: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeatCount {
    Whole(i64),
    Fractional(f64),
    Other(IgnoredAny),
}

/// Seat counts come from a formula column: overbooked rows go negative and
/// some rows carry floats. Neither may reject the rest of the table.
fn lenient_seat_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let seats = match RawSeatCount::deserialize(deserializer)? {
        RawSeatCount::Whole(n) => Some(n.clamp(0, i64::from(u32::MAX)) as u32),
        RawSeatCount::Fractional(n) if n.is_finite() => {
            Some(n.floor().clamp(0.0, f64::from(u32::MAX)) as u32)
        }
        RawSeatCount::Fractional(_) | RawSeatCount::Other(_) => None,
    };
    Ok(seats)
}

/// Geocoded `[lat, lon]` pair. Either side may be null when geocoding failed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates(pub Option<f64>, pub Option<f64>);

impl Coordinates {
    /// Returns the point only when both components are present and finite.
    pub fn valid(&self) -> Option<(f64, f64)> {
        match (self.0, self.1) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

impl EventRecord {
    /// Plottable position of the record, if any.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.coordinates.as_ref().and_then(Coordinates::valid)
    }
}

/// Body returned by the events API: `{ map: { data: [...] }, updated_at?: "..." }`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventFeedPayload {
    pub map: EventTable,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub stale: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventTable {
    #[serde(default)]
    pub data: Vec<EventRecord>,
}

/// Snapshot handed from the server function to the map view.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EventFeed {
    pub events: Vec<EventRecord>,
    pub updated_at: Option<String>,
}

impl From<EventFeedPayload> for EventFeed {
    fn from(payload: EventFeedPayload) -> Self {
        Self {
            events: payload.map.data,
            updated_at: payload.updated_at,
        }
    }
}
