// CourtScout - app/viewport.rs
//
// Map camera: centre + zoom, with Web-Mercator projection between
// geographic points and screen offsets. Pure math, no egui types.

use crate::core::model::GeoPoint;
use crate::util::constants;
use std::f64::consts::PI;

/// Latitude limit of the Web-Mercator projection.
const MERCATOR_MAX_LAT: f64 = 85.051_128_78;

/// Current map camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(
                constants::DEFAULT_MAP_CENTER_LAT,
                constants::DEFAULT_MAP_CENTER_LNG,
            ),
            zoom: constants::DEFAULT_MAP_ZOOM,
        }
    }
}

impl MapViewport {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: clamp_zoom(zoom),
        }
    }

    /// Move to `center`, zooming in to at least `min_zoom` but never
    /// zooming out.
    pub fn fly_to(&mut self, center: GeoPoint, min_zoom: f64) {
        self.center = center;
        self.zoom = clamp_zoom(self.zoom.max(min_zoom));
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = clamp_zoom(self.zoom + delta);
    }

    /// Screen offset of `point` relative to the top-left of a view of
    /// `size` (width, height) pixels.
    pub fn to_screen(&self, point: GeoPoint, size: (f64, f64)) -> (f64, f64) {
        let (px, py) = world_pixel(point, self.zoom);
        let (cx, cy) = world_pixel(self.center, self.zoom);
        (px - cx + size.0 / 2.0, py - cy + size.1 / 2.0)
    }

    /// Geographic point under a screen offset.
    pub fn from_screen(&self, offset: (f64, f64), size: (f64, f64)) -> GeoPoint {
        let (cx, cy) = world_pixel(self.center, self.zoom);
        unproject(
            cx + offset.0 - size.0 / 2.0,
            cy + offset.1 - size.1 / 2.0,
            self.zoom,
        )
    }

    /// Drag the map by a pixel delta (content follows the pointer).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let (cx, cy) = world_pixel(self.center, self.zoom);
        self.center = unproject(cx - dx, cy - dy, self.zoom);
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(constants::MIN_MAP_ZOOM, constants::MAX_MAP_ZOOM)
}

fn world_size(zoom: f64) -> f64 {
    constants::TILE_SIZE * 2f64.powf(zoom)
}

/// Web-Mercator world pixel of `point` at `zoom`.
fn world_pixel(point: GeoPoint, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT).to_radians();
    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

fn unproject(x: f64, y: f64, zoom: f64) -> GeoPoint {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: (f64, f64) = (800.0, 600.0);

    #[test]
    fn test_default_is_portland() {
        let view = MapViewport::default();
        assert_eq!(view.center, GeoPoint::new(45.5152, -122.6784));
        assert_eq!(view.zoom, 9.0);
    }

    #[test]
    fn test_fly_to_never_zooms_out() {
        let mut view = MapViewport::default();
        let target = GeoPoint::new(45.6, -122.8);
        view.fly_to(target, 14.0);
        assert_eq!(view.center, target);
        assert_eq!(view.zoom, 14.0);

        view.zoom = 16.0;
        view.fly_to(target, 14.0);
        assert_eq!(view.zoom, 16.0);
    }

    #[test]
    fn test_center_projects_to_middle() {
        let view = MapViewport::default();
        let (x, y) = view.to_screen(view.center, VIEW);
        assert!((x - 400.0).abs() < 1e-6);
        assert!((y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_round_trip() {
        let view = MapViewport::new(GeoPoint::new(45.5, -122.7), 12.0);
        let point = GeoPoint::new(45.52, -122.65);
        let screen = view.to_screen(point, VIEW);
        let back = view.from_screen(screen, VIEW);
        assert!((back.lat - point.lat).abs() < 1e-9);
        assert!((back.lng - point.lng).abs() < 1e-9);
    }

    #[test]
    fn test_north_is_up_east_is_right() {
        let view = MapViewport::default();
        let north = GeoPoint::new(view.center.lat + 0.1, view.center.lng);
        let east = GeoPoint::new(view.center.lat, view.center.lng + 0.1);
        assert!(view.to_screen(north, VIEW).1 < 300.0);
        assert!(view.to_screen(east, VIEW).0 > 400.0);
    }

    #[test]
    fn test_pan_moves_content_with_pointer() {
        let mut view = MapViewport::default();
        let point = GeoPoint::new(45.6, -122.6);
        let before = view.to_screen(point, VIEW);
        view.pan_by(25.0, -10.0);
        let after = view.to_screen(point, VIEW);
        assert!((after.0 - before.0 - 25.0).abs() < 1e-6);
        assert!((after.1 - before.1 + 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = MapViewport::default();
        view.zoom_by(100.0);
        assert_eq!(view.zoom, constants::MAX_MAP_ZOOM);
        view.zoom_by(-100.0);
        assert_eq!(view.zoom, constants::MIN_MAP_ZOOM);
    }
}
