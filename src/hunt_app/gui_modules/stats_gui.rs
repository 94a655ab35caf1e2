
use egui::{Layout, Align};
use egui_extras::{TableBuilder, Column, TableRow};

use crate::{
    framework::gui::GuiModule,
    hunt_app::scene::Scene
};

pub struct StatsGui;

/// One table row per measured scope. Returns whether the pin button was clicked.
fn stat_row(row: &mut TableRow, name: &'static str, record: &profiler::StatisticRecord, pin_icon: &str) -> bool {
    let mut clicked = false;
    row.col(|ui| {
        clicked = ui.button(pin_icon).clicked();
    });
    row.col(|ui| { ui.label(name); });
    row.col(|ui| { ui.label(format!("{:?}", record.latest())); });
    row.col(|ui| { ui.label(format!("{:?}", record.average())); });
    row.col(|ui| { ui.label(format!("{:?}", record.max_time)); });
    row.col(|ui| { ui.label(format!("{:?}", record.min_time)); });
    clicked
}

impl GuiModule<Scene> for StatsGui {
    fn gui_window(&mut self, _: &mut Scene, egui_ctx: &egui::Context) {
        egui::Window::new("Statistics").show(egui_ctx, |ui| {
            let mut statistics_guard = profiler::STATISTICS.lock();
            let Some(statistics) = statistics_guard.as_mut() else { return; };

            // searchbar
            ui.horizontal(|ui| {
                ui.label("Search:");
                ui.text_edit_singleline(&mut statistics.filter);
                if ui.button("✖").clicked() {
                    statistics.filter.clear();
                }
            });

            let mut to_pin: Option<&'static str> = None;
            let mut to_unpin: Option<&'static str> = None;

            TableBuilder::new(ui)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(Column::auto()) // pin button
                .column(Column::auto().resizable(true).clip(true)) // name
                .column(Column::initial(50.0)) // last value
                .column(Column::initial(50.0)) // average
                .column(Column::initial(50.0)) // max
                .column(Column::initial(50.0)) // min
                .column(Column::remainder())
                .min_scrolled_height(0.0)
                .header(20.0, |mut header| {
                    header.col(|_| { });
                    header.col(|ui| { ui.strong("Name"); });
                    header.col(|ui| { ui.strong("Latest"); });
                    header.col(|ui| { ui.strong("Average"); });
                    header.col(|ui| { ui.strong("Max"); });
                    header.col(|ui| { ui.strong("Min"); });
                })
                .body(|mut body| {
                    for (name, record) in statistics.pinned() {
                        body.row(20.0, |mut row| {
                            if stat_row(&mut row, name, record, "★") {
                                to_unpin = Some(name);
                            }
                        });
                    }

                    // separator blank row
                    body.row(25.0, |mut row| {
                        row.col(|_| { });
                        row.col(|ui| { ui.strong("Unpinned:"); });
                    });

                    for (name, record) in statistics.unpinned() {
                        body.row(20.0, |mut row| {
                            if stat_row(&mut row, name, record, "☆") {
                                to_pin = Some(name);
                            }
                        });
                    }
                });

            if let Some(name) = to_pin {
                statistics.pin(name);
            }
            if let Some(name) = to_unpin {
                statistics.unpin(name);
            }
        });
    }

    fn gui_section(&mut self, _: &mut Scene, _: &mut egui::Ui) {}
}
