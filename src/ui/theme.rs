// CourtScout - ui/theme.rs
//
// Colour scheme, marker styling, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::CourtType;
use egui::Color32;

/// Marker fill opacity (0.85).
const MARKER_ALPHA: u8 = 217;

/// Marker fill colour for a court type.
pub fn marker_colour(court_type: CourtType) -> Color32 {
    match court_type {
        CourtType::Indoor => Color32::from_rgba_unmultiplied(0x34, 0x98, 0xdb, MARKER_ALPHA), // blue
        CourtType::Outdoor => Color32::from_rgba_unmultiplied(0x2e, 0xcc, 0x71, MARKER_ALPHA), // green
        CourtType::Both => Color32::from_rgba_unmultiplied(0x9b, 0x59, 0xb6, MARKER_ALPHA), // purple
        CourtType::Unknown => Color32::from_rgba_unmultiplied(0x95, 0xa5, 0xa6, MARKER_ALPHA), // grey
    }
}

/// Marker radius in points, stepped by court count.
pub fn marker_radius(count: u32) -> f32 {
    match count {
        0 => 5.0,
        1..=2 => 6.0,
        3..=4 => 8.0,
        _ => 10.0,
    }
}

/// Marker outline.
pub const MARKER_STROKE_WIDTH: f32 = 1.0;
pub const MARKER_STROKE: Color32 = Color32::BLACK;

/// Selected marker outline.
pub const SELECTED_STROKE_WIDTH: f32 = 2.5;
pub const SELECTED_STROKE: Color32 = Color32::from_rgb(251, 191, 36); // Amber 400

/// User location marker.
pub const USER_LOCATION: Color32 = Color32::from_rgb(231, 76, 60);
pub const USER_LOCATION_RADIUS: f32 = 7.0;

/// Map background when no basemap is drawn.
pub fn map_background(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(30, 36, 44)
    } else {
        Color32::from_rgb(232, 236, 240)
    }
}

/// Graticule line colour.
pub fn grid_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(55, 65, 81) // Gray 700
    } else {
        Color32::from_rgb(203, 213, 225) // Slate 300
    }
}

/// Notice colour for location failures.
pub const NOTICE_TEXT: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const DETAIL_PANE_WIDTH: f32 = 280.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_radius_steps() {
        assert_eq!(marker_radius(0), 5.0);
        assert_eq!(marker_radius(1), 6.0);
        assert_eq!(marker_radius(2), 6.0);
        assert_eq!(marker_radius(3), 8.0);
        assert_eq!(marker_radius(4), 8.0);
        assert_eq!(marker_radius(5), 10.0);
        assert_eq!(marker_radius(u32::MAX), 10.0);
    }

    #[test]
    fn test_marker_colours_distinct() {
        let colours: std::collections::HashSet<_> =
            CourtType::all().iter().map(|t| marker_colour(*t)).collect();
        assert_eq!(colours.len(), 4);
        assert!(colours.iter().all(|c| c.a() == MARKER_ALPHA));
    }
}
