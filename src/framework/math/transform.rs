/// Position, rotation and scale of an entity, `as_mat` bakes them into a
/// model matrix.
#[derive(Clone, Debug)]
pub struct Transform {
    pub position: glam::Vec3,
    pub rotation: glam::Quat,
    pub scale: glam::Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: glam::Vec3::ZERO,
        rotation: glam::Quat::IDENTITY,
        scale: glam::Vec3::ONE,
    };

    pub fn from_position(position: glam::Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    #[inline]
    pub fn as_mat(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    #[inline]
    pub fn translate(&self, translation: glam::Vec3) -> Self {
        Self { position: self.position + translation, ..*self }
    }

    #[inline]
    pub fn rotate(&self, rotation: glam::Quat) -> Self {
        Self { rotation: self.rotation * rotation, ..*self }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
