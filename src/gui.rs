// CourtScout - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu, sidebar, detail pane, and map.

use crate::app::state::AppState;
use crate::core::export;
use crate::ui;
use std::path::Path;

/// Export formats offered in the File menu.
#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    GeoJson,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::GeoJson => "GeoJSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::GeoJson => "geojson",
        }
    }
}

/// The CourtScout application.
pub struct CourtScoutApp {
    pub state: AppState,
}

impl CourtScoutApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn open_dataset(&mut self, path: &Path) {
        if let Err(e) = self.state.load_dataset(path) {
            tracing::error!(error = %e, "Failed to load dataset");
            self.state.status_message = format!("Could not load dataset: {e}");
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format!("courts.{}", format.extension()))
            .save_file()
        else {
            return;
        };

        let courts = self.state.filtered_courts();
        let result = match std::fs::File::create(&dest) {
            Ok(f) => match format {
                ExportFormat::Csv => export::export_csv(&courts, f, &dest),
                ExportFormat::GeoJson => export::export_geojson(&courts, f, &dest),
            },
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
                return;
            }
        };

        self.state.status_message = match result {
            Ok(n) => {
                tracing::info!(courts = n, path = %dest.display(), "Export complete");
                format!("Exported {n} courts to {}.", format.label())
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("{} export failed: {e}", format.label())
            }
        };
    }
}

impl eframe::App for CourtScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Dataset\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("GeoJSON", &["geojson", "json"])
                            .pick_file()
                        {
                            self.open_dataset(&path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only when courts are listed
                    let has_courts = !self.state.last_result.is_empty();
                    ui.add_enabled_ui(has_courts, |ui| {
                        ui.menu_button("Export", |ui| {
                            for format in [ExportFormat::Csv, ExportFormat::GeoJson] {
                                if ui.button(format!("Export {}\u{2026}", format.label())).clicked() {
                                    self.export(format);
                                    ui.close_menu();
                                }
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if let Some(ref notice) = self.state.notice {
                    ui.separator();
                    ui.label(egui::RichText::new(notice).color(ui::theme::NOTICE_TEXT));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref path) = self.state.dataset_path {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        ui.label(egui::RichText::new(name).weak())
                            .on_hover_text(path.display().to_string());
                    }
                    if !self.state.warnings.is_empty() {
                        let n = self.state.warnings.len();
                        ui.label(
                            egui::RichText::new(format!("\u{26a0} {n}"))
                                .color(ui::theme::NOTICE_TEXT),
                        )
                        .on_hover_text(self.state.warnings.join("\n"));
                    }
                });
            });
        });

        // Left sidebar: filters on top, court list below.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::filters::render(ui, &mut self.state);
                ui.separator();
                ui::panels::court_list::render(ui, &mut self.state);
            });

        // Detail pane (right), only while a court is selected.
        if self.state.engine.detail_sink().current.is_some() {
            egui::SidePanel::right("detail_pane")
                .default_width(ui::theme::DETAIL_PANE_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    ui::panels::detail::render(ui, &mut self.state);
                });
        }

        // Central panel (map)
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui::panels::map::render(ui, &mut self.state);
            });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
