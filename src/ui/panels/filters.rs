// CourtScout - ui/panels/filters.rs
//
// Filter controls sidebar: find-nearby, distance, court type, minimum count.

use crate::app::state::AppState;
use crate::core::filter::CourtTypeFilter;
use crate::ui::theme;
use crate::util::constants;

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Find Courts");
    ui.separator();

    if ui
        .button("\u{1f4cd} Find nearby")
        .on_hover_text("Measure distances from your location and sort by nearest")
        .clicked()
    {
        state.locate();
    }
    if let Some(ref notice) = state.notice {
        ui.label(egui::RichText::new(notice).color(theme::NOTICE_TEXT).small());
    }

    ui.add_space(6.0);

    // Distance: the label tracks the slider live, the filter applies on release.
    ui.label(format!("Within {:.0} km", state.distance_input_km));
    let response = ui.add_enabled(
        state.filter_state.reference.is_some(),
        egui::Slider::new(
            &mut state.distance_input_km,
            constants::MIN_DISTANCE_KM..=constants::MAX_DISTANCE_KM,
        )
        .step_by(1.0)
        .show_value(false),
    );
    if response.drag_stopped() || (response.changed() && !response.dragged()) {
        state.set_max_distance(Some(state.distance_input_km));
    }
    if state.filter_state.reference.is_none() {
        ui.label(
            egui::RichText::new("Distance applies once your location is known.")
                .small()
                .weak(),
        );
    }

    ui.add_space(6.0);

    let mut court_type = state.filter_state.court_type;
    egui::ComboBox::from_label("Court type")
        .selected_text(court_type.label())
        .show_ui(ui, |ui| {
            for option in CourtTypeFilter::selectable() {
                ui.selectable_value(&mut court_type, *option, option.label());
            }
        });
    state.set_court_type(court_type);

    ui.add_space(6.0);

    ui.label("Minimum courts:");
    let mut min_courts = state.filter_state.min_courts;
    ui.horizontal_wrapped(|ui| {
        for &option in constants::MIN_COURT_OPTIONS {
            let label = if option == 0 {
                "Any".to_string()
            } else {
                format!("{option}+")
            };
            ui.selectable_value(&mut min_courts, option, label);
        }
    });
    state.set_min_courts(min_courts);
}
