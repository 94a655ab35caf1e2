
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::{
    hunt_app::{
        config::LocomotionFlags,
        init_scene::EYE_HEIGHT,
        scene::Scene,
    },
    framework::{
        gui::GuiModule,
        camera::{
            OrbitCameraRig,
            WalkCameraRig, CameraRig
        },
    },
};

#[derive(Clone, Debug, AsRefStr, EnumIter, PartialEq)]
enum CameraMode {
    Walk,
    Orbit,
}

pub struct CameraGuiModule;

impl CameraGuiModule {

    fn create_walk_camera_rig(&self, scene: &Scene) -> CameraRig {
        let mut camera = scene.camera_rig.camera().clone();
        camera.position.y = EYE_HEIGHT;
        let mut rig = WalkCameraRig::from_camera(camera, 0.2, scene.config.locomotion.speed);
        rig.movement_enabled = scene.config.locomotion.flags().contains(LocomotionFlags::SMOOTH);
        CameraRig::Walk(rig)
    }

    fn create_orbit_camera_rig(&self, scene: &Scene) -> CameraRig {
        CameraRig::Orbit(OrbitCameraRig::from_camera(
            scene.camera_rig.camera().clone(),
            glam::Vec3::ZERO,
            10.0,
        ))
    }
}

impl GuiModule<Scene> for CameraGuiModule {
    fn gui_window(&mut self, _: &mut Scene, _: &egui::Context) {}

    fn gui_section(&mut self, scene: &mut Scene, ui: &mut egui::Ui) {
        let mut mode = match scene.camera_rig {
            CameraRig::Walk(_) => CameraMode::Walk,
            CameraRig::Orbit(_) => CameraMode::Orbit,
        };
        let previous_mode = mode.clone();

        ui.horizontal(|ui| {
            ui.label("Camera");
            egui::ComboBox::from_id_source("camera_mode")
                .selected_text(mode.as_ref())
                .show_ui(ui, |ui| {
                    for m in CameraMode::iter() {
                        ui.selectable_value(&mut mode, m.clone(), m.as_ref());
                    }
                });
        });

        if let CameraRig::Walk(rig) = &mut scene.camera_rig {
            ui.horizontal(|ui| {
                ui.label("Look Speed");
                ui.add(egui::Slider::new(&mut rig.look_speed, 0.0..=1.0));
            });
            ui.horizontal(|ui| {
                ui.label("Move Speed");
                ui.add(egui::Slider::new(&mut rig.move_speed, 0.0..=5.0));
            });
        }

        if previous_mode != mode {
            scene.camera_rig = match mode {
                CameraMode::Walk => self.create_walk_camera_rig(scene),
                CameraMode::Orbit => self.create_orbit_camera_rig(scene),
            };
        }
    }
}
