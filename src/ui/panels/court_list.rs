// CourtScout - ui/panels/court_list.rs
//
// Court list in display order. Rows come from the list sink; clicking a row
// selects the court.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the court list.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let list = state.engine.list_sink();

    if state.courts.is_empty() {
        ui.label("No courts loaded.\nOpen a dataset via File \u{2192} Open Dataset.");
        return;
    }
    if list.rows.is_empty() {
        ui.label(constants::NO_RESULTS_MESSAGE);
        return;
    }

    // Selection is applied after the loop so the list sink is not borrowed
    // while state is mutated.
    let mut clicked: Option<usize> = None;

    egui::ScrollArea::vertical()
        .id_salt("court_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for row in &list.rows {
                let is_selected = state.selected == Some(row.id);
                let response = ui
                    .vertical(|ui| {
                        let title = ui.selectable_label(
                            is_selected,
                            egui::RichText::new(&row.name).strong(),
                        );
                        if let Some(ref location) = row.location {
                            ui.label(egui::RichText::new(location).small());
                        }
                        if let Some(ref distance) = row.distance {
                            ui.label(egui::RichText::new(distance).small().weak());
                        }
                        title
                    })
                    .inner;
                if response.clicked() {
                    clicked = Some(row.id);
                }
                ui.separator();
            }
        });

    if let Some(id) = clicked {
        state.select(id);
    }
}
