use crate::framework::math::Transform;

/// Plain projection and placement state, rigs do the moving.
#[derive(Debug, Clone)]
pub struct Camera {
    pub aspect_ratio: f32,
    pub fov:          f32,
    pub near:         f32,
    pub far:          f32,
    pub position:     glam::Vec3,
    pub rotation:     glam::Quat,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            fov:          90.0,
            near:         0.1,
            far:          100.0,
            position:     glam::Vec3::ZERO,
            rotation:     glam::Quat::IDENTITY,
        }
    }
}

impl Camera {
    
    pub fn look_at(mut self, target: glam::Vec3) -> Self {
        // look_at_rh gives the view rotation, the camera itself carries the inverse.
        let look_at_matrix = glam::Mat4::look_at_rh(self.position, target, glam::Vec3::Y);
        self.rotation = glam::Quat::from_mat4(&look_at_matrix).inverse();
        self
    }
    
    /// The world is seen through the inverse of the camera placement.
    pub fn view_matrix(&self) -> glam::Mat4 {
        self.transform().as_mat().inverse()
    }

    pub fn projection_matrix(&self) -> glam::Mat4 {
        glam::Mat4::perspective_rh(self.fov.to_radians(), self.aspect_ratio, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> glam::Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn transform(&self) -> Transform {
        Transform::from_position(self.position).rotate(self.rotation)
    }
}
