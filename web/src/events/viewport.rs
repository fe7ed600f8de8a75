use leptos_leaflet::leaflet::{LatLng, LatLngBounds, Map};

use crate::events::bounds::BoundingBox;

/// The one viewport command the map view needs from the rendering library.
pub trait MapViewport {
    /// Animate the view so the rectangle spanned by the two `(lat, lon)`
    /// corners is fully visible.
    fn fly_to_bounds(&self, south_west: (f64, f64), north_east: (f64, f64));
}

impl MapViewport for Map {
    fn fly_to_bounds(&self, (south, west): (f64, f64), (north, east): (f64, f64)) {
        let bounds = LatLngBounds::new(&LatLng::new(south, west), &LatLng::new(north, east));
        Map::fly_to_bounds(self, &bounds);
    }
}

/// Fits the viewport to `bounds` unless the box is still the empty sentinel.
/// Returns whether a command was issued.
pub fn fit_to_bounds(viewport: &impl MapViewport, bounds: &BoundingBox) -> bool {
    match bounds.corners() {
        Some((south_west, north_east)) => {
            viewport.fly_to_bounds(south_west, north_east);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingViewport {
        fits: Cell<usize>,
    }

    impl MapViewport for CountingViewport {
        fn fly_to_bounds(&self, _: (f64, f64), _: (f64, f64)) {
            self.fits.set(self.fits.get() + 1);
        }
    }

    #[test]
    fn degenerate_box_is_left_alone() {
        let viewport = CountingViewport::default();
        assert!(!fit_to_bounds(&viewport, &BoundingBox::EMPTY));

        // A half-filled box is still degenerate.
        let half = BoundingBox {
            min_lat: 45.0,
            max_lat: 46.0,
            ..BoundingBox::EMPTY
        };
        assert!(!fit_to_bounds(&viewport, &half));
        assert_eq!(viewport.fits.get(), 0);
    }

    #[test]
    fn single_point_box_is_fitted() {
        let viewport = CountingViewport::default();
        let bounds = BoundingBox::from_points([(46.8, -71.2)]);
        assert!(fit_to_bounds(&viewport, &bounds));
        assert_eq!(viewport.fits.get(), 1);
    }
}
