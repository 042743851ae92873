// CourtScout - ui/panels/about.rs
//
// About dialog: shown from Help -> About.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::core::model::CourtType;
use crate::ui::theme;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(constants::APP_NAME)
                        .size(26.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label("Find pickleball courts near you,");
                ui.label("filtered by distance, setting, and size.");
            });

            ui.add_space(8.0);

            // Marker legend
            egui::Grid::new("about_legend")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for court_type in CourtType::all() {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter().circle(
                            rect.center(),
                            6.0,
                            theme::marker_colour(*court_type),
                            egui::Stroke::new(theme::MARKER_STROKE_WIDTH, theme::MARKER_STROKE),
                        );
                        ui.label(court_type.label());
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });
            ui.add_space(6.0);
        });

    if !open {
        state.show_about = false;
    }
}
