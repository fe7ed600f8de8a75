use chrono::DateTime;

/// Tile attribution, suffixed with the feed's "last updated" time when the
/// API supplied a parsable RFC 3339 timestamp.
pub fn tile_attribution(
    base: &str,
    last_updated_label: &str,
    updated_at: Option<&str>,
    timestamp_format: &str,
) -> String {
    match updated_at.and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok()) {
        Some(timestamp) => format!(
            "{base} | {last_updated_label} {}",
            timestamp.format(timestamp_format)
        ),
        None => base.to_string(),
    }
}
