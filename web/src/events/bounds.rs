use shared_types::EventRecord;

/// Smallest axis-aligned rectangle covering every plottable event.
///
/// An empty accumulation keeps the infinite sentinels, which callers read as
/// "nothing to fit".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox {
        min_lat: f64::INFINITY,
        max_lat: f64::NEG_INFINITY,
        min_lon: f64::INFINITY,
        max_lon: f64::NEG_INFINITY,
    };

    pub fn from_events(events: &[EventRecord]) -> Self {
        Self::from_points(events.iter().filter_map(EventRecord::position))
    }

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |bounds, point| bounds.extend(point))
    }

    #[must_use]
    pub fn extend(self, (lat, lon): (f64, f64)) -> Self {
        Self {
            min_lat: self.min_lat.min(lat),
            max_lat: self.max_lat.max(lat),
            min_lon: self.min_lon.min(lon),
            max_lon: self.max_lon.max(lon),
        }
    }

    /// True while any bound still holds its sentinel value.
    pub fn is_degenerate(&self) -> bool {
        self.min_lat == f64::INFINITY
            || self.max_lat == f64::NEG_INFINITY
            || self.min_lon == f64::INFINITY
            || self.max_lon == f64::NEG_INFINITY
    }

    /// `(south_west, north_east)` corners, or `None` for the sentinel box.
    pub fn corners(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.is_degenerate() {
            return None;
        }
        Some(((self.min_lat, self.min_lon), (self.max_lat, self.max_lon)))
    }
}
