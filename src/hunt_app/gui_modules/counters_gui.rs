
use std::time::Duration;

use crate::{
    framework::gui::GuiModule,
    hunt_app::scene::Scene
};

pub struct CountersGui;

fn milliseconds(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

impl GuiModule<Scene> for CountersGui {
    fn gui_window(&mut self, _: &mut Scene, _: &egui::Context) {}

    fn gui_section(&mut self, _: &mut Scene, ui: &mut egui::Ui) {
        counters::with_counters!(|counters| {
            if let Some(counter) = counters.get("frame_counter") {
                ui.label(format!("Frames: {:.0}", counter.total));
                ui.label(format!("FPS: {:.3}", counter.sum_past_values_second()));
                ui.label(format!("Last Frame time: {}", milliseconds(counter.duration_of_last_sample())));
                ui.label(format!("Frame Time Average: {}", milliseconds(counter.average_duration_past(100))));
            }
            ui.separator();
            if let Some(counter) = counters.get("update_counter") {
                ui.label(format!("UPS: {:.3}", counter.sum_past_values_second()));
                ui.label(format!("Last Update time: {}", milliseconds(counter.duration_of_last_sample())));
            }
            ui.separator();
            if let Some(counter) = counters.get("event_counter") {
                ui.label(format!("Events: {:.0}", counter.total));
                ui.label(format!("EPS: {:.3}", counter.sum_past_values_second()));
            }
            ui.separator();
            ui.label(format!("Drawn instances: {:.0}", counters.get_latest_value("instance_counter")));
            ui.label(format!("Spheres collected: {:.0}", counters.get_total("collect_counter")));
        });
    }
}
