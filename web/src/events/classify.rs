use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Where an event sits relative to today's calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalStatus {
    Upcoming,
    Past,
    /// The assembly date is missing or could not be parsed.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_public_action(is_public_action: bool) -> Self {
        if is_public_action {
            Self::Public
        } else {
            Self::Private
        }
    }
}

/// Calendar date of an assembly. Accepts `YYYY-MM-DD` as well as full
/// ISO 8601 / RFC 3339 date-times, whose time of day is dropped.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|date_time| date_time.date())
        .ok()
}

/// An event dated today is still upcoming.
pub fn classify(assembly_date: &str, today: NaiveDate) -> TemporalStatus {
    match parse_event_date(assembly_date) {
        Some(date) if date >= today => TemporalStatus::Upcoming,
        Some(_) => TemporalStatus::Past,
        None => TemporalStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn same_day_is_upcoming() {
        assert_eq!(classify("2024-06-15", today()), TemporalStatus::Upcoming);
    }

    #[test]
    fn day_before_is_past() {
        assert_eq!(classify("2024-06-14", today()), TemporalStatus::Past);
    }

    #[test]
    fn day_after_is_upcoming() {
        assert_eq!(classify("2024-06-16", today()), TemporalStatus::Upcoming);
    }

    #[test]
    fn time_of_day_is_ignored() {
        assert_eq!(
            classify("2024-06-15T00:00:00.000Z", today()),
            TemporalStatus::Upcoming
        );
        assert_eq!(
            classify("2024-06-15T23:59:00", today()),
            TemporalStatus::Upcoming
        );
        assert_eq!(
            classify("2024-06-14T23:59:59-04:00", today()),
            TemporalStatus::Past
        );
    }

    #[test]
    fn unparsable_dates_are_unknown() {
        for raw in ["", "   ", "demain", "2024-13-40", "15/06/2024"] {
            assert_eq!(classify(raw, today()), TemporalStatus::Unknown, "{raw:?}");
        }
    }

    #[test]
    fn visibility_passes_the_flag_through() {
        assert_eq!(Visibility::from_public_action(true), Visibility::Public);
        assert_eq!(Visibility::from_public_action(false), Visibility::Private);
    }
}
