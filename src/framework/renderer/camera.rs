use crate::framework::{self, math::Transform};

/// Per frame camera state distributed to render modules through the render context.
/// Modules read it as a push constant payload, see `to_push_constant_data`.
#[derive(Debug)]
pub struct Camera {
    pub camera: framework::camera::Camera,
    pub view_projection_matrix: glam::Mat4,
    pub transform: Transform,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PushConstantData {
    pub projection_matrix: glam::Mat4,
    pub position: glam::Vec4,
}

impl Camera {
    pub fn new() -> Self {
        let mut snapshot = Self {
            camera: framework::camera::Camera::default(),
            view_projection_matrix: glam::Mat4::IDENTITY,
            transform: Transform::IDENTITY,
        };
        let initial = snapshot.camera.clone();
        snapshot.update(&initial);
        snapshot
    }

    #[profiler::function]
    pub fn update(&mut self, camera: &framework::camera::Camera) {
        self.camera = camera.clone();
        self.view_projection_matrix = self.camera.view_projection_matrix();
        self.transform = self.camera.transform();
    }

    pub fn to_push_constant_data(&self) -> PushConstantData {
        PushConstantData {
            projection_matrix: self.view_projection_matrix,
            position: glam::Vec4::from((self.transform.position, 1.0)),
        }
    }
}
