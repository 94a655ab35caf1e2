///! Right click teleports the walking camera a bounded step across the ground.

use crate::{
    hunt_app::{
        config::LocomotionFlags,
        scene::Scene,
    },
    framework::{
        camera::CameraRig,
        math::Ray,
        updater::{
            UpdaterModule,
            UpdateContext,
            UpdateResultAction,
            InputUpdateResult,
        }
    },
};

pub struct TeleportUpdater;

impl UpdaterModule<Scene> for TeleportUpdater {

    #[profiler::function]
    fn input(&mut self, context: &mut UpdateContext<Scene>) -> InputUpdateResult {
        if !context.input.mouse_pressed(1) {
            return InputUpdateResult::default();
        }
        let Some(cursor) = context.input.mouse() else {
            return InputUpdateResult::default();
        };

        let size = context.window.inner_size();
        let scene = &mut *context.scene;
        if !scene.config.locomotion.flags().contains(LocomotionFlags::TELEPORT) {
            return InputUpdateResult::default();
        }

        // Only the walking rig stands on the ground, the orbit rig has nowhere
        // to teleport to.
        let CameraRig::Walk(rig) = &mut scene.camera_rig else {
            return InputUpdateResult::default();
        };

        let Some(ray) = Ray::from_screen(rig.camera(), cursor, (size.width, size.height)) else {
            return InputUpdateResult::default();
        };
        let Some(hit) = ray.intersect_plane_y(0.0) else {
            return InputUpdateResult::default();
        };

        // Clamp the jump to the configured reach.
        let position = rig.camera().position;
        let step = glam::vec3(hit.x - position.x, 0.0, hit.z - position.z)
            .clamp_length_max(scene.config.locomotion.teleport_distance);
        rig.teleport_to(position + step);

        InputUpdateResult {
            handled: true,
            result: UpdateResultAction::Redraw,
        }
    }
}
