use hecs::World;

use crate::framework::camera::{
    CameraRig,
    SceneWithCamera
};

use super::{
    collection::CollectionTracker,
    config::WorldConfig,
    meshes::MeshPool,
    message_board::MessageBoard,
};

#[derive(Debug, Default)]
pub struct SceneCounters {
    pub gui_updates: u64,
    pub renders: u64,
}

pub struct Scene {
    pub camera_rig: CameraRig,
    pub world: World,
    pub meshes: MeshPool,
    pub collection: CollectionTracker,
    pub message_board: MessageBoard,
    pub config: WorldConfig,
    pub counters: SceneCounters,
}

impl SceneWithCamera for Scene {
    fn get_camera_rig(&self) -> &CameraRig {
        &self.camera_rig
    }

    fn get_camera_rig_mut(&mut self) -> &mut CameraRig {
        &mut self.camera_rig
    }
}
