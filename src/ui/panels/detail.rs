// CourtScout - ui/panels/detail.rs
//
// Court detail pane: name, location, courts, and a directions link.

use crate::app::state::AppState;

/// Render the detail pane (right panel). Only called while a court is shown.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(detail) = state.engine.detail_sink().current.as_ref() else {
        return;
    };

    let mut close = false;

    ui.horizontal(|ui| {
        ui.heading(&detail.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{2715}").on_hover_text("Close").clicked() {
                close = true;
            }
        });
    });
    ui.separator();

    egui::Grid::new("detail_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Location:");
            ui.label(&detail.location);
            ui.end_row();

            ui.label("Courts:");
            ui.label(&detail.courts);
            ui.end_row();

            ui.label("Position:");
            ui.label(
                egui::RichText::new(format!(
                    "{:.5}, {:.5}",
                    detail.position.lat, detail.position.lng
                ))
                .monospace(),
            );
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.hyperlink_to("Get Directions", &detail.directions_url);

    if close {
        state.close_detail();
    }
}
