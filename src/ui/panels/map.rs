// CourtScout - ui/panels/map.rs
//
// Central map view. Draws the court marker layer from the map sink onto a
// graticule, projected through the app viewport.
//
// Interaction: drag to pan, scroll to zoom, click a marker to select it.
// Markers are drawn in dataset order so later courts paint on top.

use crate::app::state::AppState;
use crate::core::model::GeoPoint;
use crate::ui::theme;
use crate::util::constants;

/// Render the map panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;
    let view = (rect.width() as f64, rect.height() as f64);
    let dark_mode = ui.visuals().dark_mode;

    // -- Interaction --
    if response.dragged() {
        let delta = response.drag_delta();
        state.viewport.pan_by(delta.x as f64, delta.y as f64);
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            state
                .viewport
                .zoom_by(constants::SCROLL_ZOOM_STEP * f64::from(scroll.signum()));
        }
    }

    let to_screen = |point: GeoPoint| -> egui::Pos2 {
        let (x, y) = state.viewport.to_screen(point, view);
        rect.min + egui::vec2(x as f32, y as f32)
    };

    // -- Background and graticule --
    painter.rect_filled(rect, 0.0, theme::map_background(dark_mode));
    draw_graticule(&painter, rect, state, dark_mode);

    // -- Court markers --
    let markers = &state.engine.map_sink().markers;
    let mut hovered: Option<(usize, f32)> = None;
    let pointer = response.hover_pos();

    for marker in markers {
        let centre = to_screen(marker.position);
        if !rect.expand(theme::marker_radius(marker.count)).contains(centre) {
            continue;
        }
        let (stroke_width, stroke_colour) = if state.selected == Some(marker.id) {
            (theme::SELECTED_STROKE_WIDTH, theme::SELECTED_STROKE)
        } else {
            (theme::MARKER_STROKE_WIDTH, theme::MARKER_STROKE)
        };
        painter.circle(
            centre,
            theme::marker_radius(marker.count),
            theme::marker_colour(marker.court_type),
            egui::Stroke::new(stroke_width, stroke_colour),
        );

        if let Some(pos) = pointer {
            let dist = pos.distance(centre);
            if dist <= constants::MARKER_HIT_RADIUS
                && hovered.map_or(true, |(_, best)| dist <= best)
            {
                hovered = Some((marker.id, dist));
            }
        }
    }

    // -- User location --
    if let Some(reference) = state.filter_state.reference {
        let centre = to_screen(reference);
        painter.circle(
            centre,
            theme::USER_LOCATION_RADIUS,
            theme::USER_LOCATION,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }

    painter.text(
        rect.right_bottom() - egui::vec2(6.0, 4.0),
        egui::Align2::RIGHT_BOTTOM,
        format!(
            "{:.4}, {:.4}  z{:.1}",
            state.viewport.center.lat, state.viewport.center.lng, state.viewport.zoom
        ),
        egui::FontId::monospace(11.0),
        ui.visuals().weak_text_color(),
    );

    let hovered_id = hovered.map(|(id, _)| id);
    if let Some(id) = hovered_id {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        if let Some(court) = state.courts.get(id) {
            let tip = format!("{} ({})", court.name, court.court_type.label());
            response.clone().on_hover_text_at_pointer(tip);
        }
    }

    if response.clicked() {
        if let Some(id) = hovered_id {
            state.select(id);
        }
    }
}

/// Latitude/longitude lines at a spacing suited to the zoom level.
fn draw_graticule(painter: &egui::Painter, rect: egui::Rect, state: &AppState, dark_mode: bool) {
    let view = (rect.width() as f64, rect.height() as f64);
    let top_left = state.viewport.from_screen((0.0, 0.0), view);
    let bottom_right = state.viewport.from_screen(view, view);
    let step = graticule_step(state.viewport.zoom);
    let stroke = egui::Stroke::new(1.0, theme::grid_colour(dark_mode));

    let mut lng = (top_left.lng / step).floor() * step;
    while lng <= bottom_right.lng {
        let (x, _) = state.viewport.to_screen(GeoPoint::new(state.viewport.center.lat, lng), view);
        let x = rect.min.x + x as f32;
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
        lng += step;
    }

    let mut lat = (bottom_right.lat / step).floor() * step;
    while lat <= top_left.lat {
        let (_, y) = state.viewport.to_screen(GeoPoint::new(lat, state.viewport.center.lng), view);
        let y = rect.min.y + y as f32;
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        lat += step;
    }
}

/// Graticule spacing in degrees: halves per zoom level from 40 degrees.
fn graticule_step(zoom: f64) -> f64 {
    40.0 / 2f64.powi(zoom.floor().clamp(0.0, 20.0) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graticule_step_shrinks_with_zoom() {
        assert_eq!(graticule_step(0.0), 40.0);
        assert_eq!(graticule_step(1.5), 20.0);
        assert!(graticule_step(14.0) < graticule_step(9.0));
    }
}
