
use egui::{Layout, Align};
use egui_extras::{TableBuilder, Column};

use crate::{
    framework::gui::GuiModule,
    hunt_app::{
        collection::CollectibleState,
        scene::Scene,
    },
};

/// Progress of the hunt, one table row per registered collectible.
pub struct CollectionGui;

impl GuiModule<Scene> for CollectionGui {
    fn gui_window(&mut self, _: &mut Scene, _: &egui::Context) {}

    fn gui_section(&mut self, scene: &mut Scene, ui: &mut egui::Ui) {
        let collection = &scene.collection;
        ui.label(format!(
            "Collected {} of {} golden spheres",
            collection.collected_count(),
            collection.target(),
        ));

        TableBuilder::new(ui)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong("Sphere"); });
                header.col(|ui| { ui.strong("State"); });
            })
            .body(|mut body| {
                for (id, state) in collection.iter() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| { ui.label(format!("{}", id.index() + 1)); });
                        row.col(|ui| {
                            ui.label(match state {
                                CollectibleState::Pending => "pending",
                                CollectibleState::Collected => "collected",
                            });
                        });
                    });
                }
            });

        ui.separator();
        ui.label(format!("Gui updates: {}", scene.counters.gui_updates));
        ui.label(format!("Renders: {}", scene.counters.renders));
    }
}
