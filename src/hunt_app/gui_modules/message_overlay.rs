
use crate::{
    framework::gui::GuiModule,
    hunt_app::scene::Scene,
};

/// Paints the current message of the `MessageBoard` over the scene, large
/// colored text on a dark backdrop. Clicks pass through the overlay so it
/// never blocks collecting a sphere behind it.
pub struct MessageOverlayGui;

impl GuiModule<Scene> for MessageOverlayGui {
    fn gui_window(&mut self, scene: &mut Scene, egui_ctx: &egui::Context) {
        // This module is always registered, so it tallies the gui passes.
        scene.counters.gui_updates += 1;

        let Some(message) = scene.message_board.current() else {
            return;
        };

        let [r, g, b, a] = message.color;
        egui::Area::new(egui::Id::new("message_overlay"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(egui_ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::from_black_alpha(102))
                    .rounding(6.0)
                    .inner_margin(egui::style::Margin::symmetric(24.0, 12.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&message.text)
                                .size(message.font_size)
                                .color(egui::Color32::from_rgba_unmultiplied(r, g, b, a)),
                        );
                    });
            });
    }

    fn gui_section(&mut self, _: &mut Scene, _: &mut egui::Ui) {}
}
