pub mod event_map;
pub mod event_marker;
