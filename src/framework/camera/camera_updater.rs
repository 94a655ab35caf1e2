use crate::framework::updater::{
    InputUpdateResult, ResizeContext, UpdateContext, UpdateResultAction, UpdaterModule,
};

use super::{Camera, SceneWithCamera};

/// Feeds input to the active camera rig and advances it on every tick.
#[derive(Default)]
pub struct CameraUpdater;

impl<S: SceneWithCamera> UpdaterModule<S> for CameraUpdater {
    #[profiler::function]
    fn input(&mut self, context: &mut UpdateContext<S>) -> InputUpdateResult {
        context.scene.get_camera_rig_mut().on_input(context.input);
        // Camera look input never claims the event for itself.
        InputUpdateResult::default()
    }

    #[profiler::function]
    fn update(&mut self, context: &mut UpdateContext<S>) -> UpdateResultAction {
        let rig = context.scene.get_camera_rig_mut();
        let before = rig.camera().transform();
        let after = rig.update(context.tick.delta.as_secs_f32(), context.input);
        if before.position != after.position || before.rotation != after.rotation {
            UpdateResultAction::Redraw
        } else {
            UpdateResultAction::None
        }
    }

    #[profiler::function]
    fn resize(&mut self, context: &mut ResizeContext<S>) -> UpdateResultAction {
        let rig = context.scene.get_camera_rig_mut();
        rig.set_camera(Camera {
            aspect_ratio: context.size.width as f32 / context.size.height as f32,
            ..*rig.camera()
        });
        UpdateResultAction::None
    }
}
