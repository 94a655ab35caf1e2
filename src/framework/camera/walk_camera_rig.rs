use winit_input_helper::WinitInputHelper;

use dolly::prelude::{Position, Smooth, YawPitch};

use crate::framework::math::Transform;

use super::Camera;

/// First person rig locked to a fixed eye height above the ground plane.
/// WASD strafes along the camera heading flattened to the XZ plane, dragging
/// the primary button looks around. Movement speed is in world units per second.
pub struct WalkCameraRig {
    rig: dolly::rig::CameraRig,
    camera: Camera,
    pub look_speed: f32,
    pub move_speed: f32,
    pub eye_height: f32,
    /// WASD walking can be switched off while teleport stays available.
    pub movement_enabled: bool,
}

impl WalkCameraRig {
    pub fn from_camera(camera: Camera, look_speed: f32, move_speed: f32) -> Self {
        let eye_height = camera.position.y;
        let mut yaw_pitch = YawPitch::new();
        yaw_pitch.set_rotation_quat(camera.rotation);
        let rig = dolly::rig::CameraRig::builder()
            .with(yaw_pitch)
            .with(Smooth::new_rotation(0.8))
            .with(Position::new(camera.position))
            .with(Smooth::new_position(0.5))
            .build();

        Self {
            rig,
            camera,
            look_speed,
            move_speed,
            eye_height,
            movement_enabled: true,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera.fov = camera.fov;
        self.camera.aspect_ratio = camera.aspect_ratio;
        self.camera.near = camera.near;
        self.camera.far = camera.far;
    }

    /// Moves the rig to stand over the given ground position, keeping eye height.
    /// The position smoothing driver carries the camera over in a short glide.
    pub fn teleport_to(&mut self, target: glam::Vec3) {
        let p = self.rig.driver_mut::<Position>();
        p.position = glam::vec3(target.x, self.eye_height, target.z).into();
    }

    pub fn on_input(&mut self, input: &WinitInputHelper) {
        let (dx, dy) = input.mouse_diff();
        if (dx != 0.0 || dy != 0.0) && input.mouse_held(0) {
            self.rig
                .driver_mut::<YawPitch>()
                .rotate_yaw_pitch(-dx * self.look_speed, -dy * self.look_speed);
        }
    }

    pub fn update(&mut self, delta_time_seconds: f32, input: &WinitInputHelper) -> Transform {
        let forward = self.movement_enabled && input.key_held(winit::event::VirtualKeyCode::W);
        let backward = self.movement_enabled && input.key_held(winit::event::VirtualKeyCode::S);
        let left = self.movement_enabled && input.key_held(winit::event::VirtualKeyCode::A);
        let right = self.movement_enabled && input.key_held(winit::event::VirtualKeyCode::D);

        let mut move_vector = glam::Vec3::ZERO;

        if forward != backward {
            let dir: glam::Vec3 = self.rig.final_transform.forward();
            let dir = glam::vec3(dir.x, 0.0, dir.z).normalize_or_zero();
            move_vector += if forward { dir } else { -dir };
        }
        if left != right {
            let dir: glam::Vec3 = self.rig.final_transform.right();
            let dir = glam::vec3(dir.x, 0.0, dir.z).normalize_or_zero();
            move_vector += if left { -dir } else { dir };
        }

        if move_vector != glam::Vec3::ZERO {
            self.rig
                .driver_mut::<Position>()
                .translate(move_vector * self.move_speed * delta_time_seconds);
        }

        // Walking never leaves the ground plane.
        let p = self.rig.driver_mut::<Position>();
        p.position.y = self.eye_height;

        let res = self.rig.update(delta_time_seconds);
        self.camera.position = res.position.into();
        self.camera.rotation = res.rotation.into();
        self.camera.transform()
    }
}
