
use super::{
    meshes::MeshID,
    collection::CollectibleId,
};

/// Entity is drawn as one instance of a pooled mesh at its `Transform`.
#[derive(Debug, Clone, Copy)]
pub struct MeshInstance {
    pub mesh: MeshID,
}

/// Entity can be collected by clicking it once.
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    pub id: CollectibleId,
    pub radius: f32,
}

/// Marks the walkable ground plane entity.
#[derive(Debug, Clone, Copy)]
pub struct Ground;
