
use crate::{
    framework::gui::GuiModule,
    hunt_app::scene::Scene,
};

/// Greets the player with the hunt instructions until closed. The panel can be
/// disabled entirely through the world configuration or `SPHERE_HUNT_WELCOME`.
pub struct WelcomePanelGui {
    dismissed: bool,
}

impl WelcomePanelGui {
    pub fn new() -> Self {
        Self { dismissed: false }
    }
}

impl GuiModule<Scene> for WelcomePanelGui {
    fn gui_window(&mut self, scene: &mut Scene, egui_ctx: &egui::Context) {
        let panel = &scene.config.welcome_panel;
        if self.dismissed || !panel.enabled {
            return;
        }

        let mut open = true;
        egui::Window::new(panel.title.as_str())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(20.0, 20.0))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(egui_ctx, |ui| {
                for line in &panel.body {
                    ui.label(line);
                }
            });

        if !open {
            self.dismissed = true;
        }
    }

    fn gui_section(&mut self, _: &mut Scene, _: &mut egui::Ui) {}
}
