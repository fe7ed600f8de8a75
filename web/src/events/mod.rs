//! Display logic for the event map: everything between the fetched rows and
//! the Leaflet primitives. Nothing in here touches the DOM.

pub mod attribution;
pub mod bounds;
pub mod classify;
pub mod icons;
pub mod markers;
pub mod popup;
pub mod viewport;

pub use attribution::tile_attribution;
pub use bounds::BoundingBox;
pub use classify::{classify, TemporalStatus, Visibility};
pub use icons::{IconSet, MarkerIcon, MarkerIcons};
pub use markers::{project_markers, EventMarker, MapScene, ProjectionContext};
pub use popup::{ActionKind, ActionLink, PopupBlock, PopupContent};
pub use viewport::{fit_to_bounds, MapViewport};
