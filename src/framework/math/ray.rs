use glam::Vec3;

use crate::framework::camera::Camera;

/// A world-space ray with a normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray from the camera through the given cursor position.
    /// Cursor and viewport are in the same (physical pixel) coordinate space,
    /// cursor y growing downwards.
    pub fn from_screen(camera: &Camera, cursor: (f32, f32), viewport: (u32, u32)) -> Option<Self> {
        let (width, height) = viewport;
        if width == 0 || height == 0 {
            return None;
        }

        let ndc_x = 2.0 * cursor.0 / width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.1 / height as f32;

        // wgpu clip space has depth 0..1, near plane at z = 0
        let inverse_view_projection = camera.view_projection_matrix().inverse();
        let near = inverse_view_projection.project_point3(glam::vec3(ndc_x, ndc_y, 0.0));
        let far = inverse_view_projection.project_point3(glam::vec3(ndc_x, ndc_y, 1.0));

        let direction = (far - near).normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        Some(Self {
            origin: near,
            direction,
        })
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the nearest intersection with a sphere,
    /// `None` when the sphere is missed or lies behind the origin.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_origin = self.origin - center;
        let half_b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t_near = -half_b - sqrt_discriminant;
        if t_near > 0.0 {
            return Some(t_near);
        }
        let t_far = -half_b + sqrt_discriminant;
        if t_far > 0.0 {
            return Some(t_far);
        }
        None
    }

    /// Intersection with the horizontal plane `y = height` in front of
    /// the origin.
    pub fn intersect_plane_y(&self, height: f32) -> Option<Vec3> {
        if self.direction.y.abs() < 1e-6 {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        if t <= 0.0 {
            return None;
        }
        Some(self.point_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_sphere_straight_ahead() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn misses_sphere_off_to_the_side() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(ray.intersect_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(ray.intersect_sphere(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_the_far_side() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn hits_ground_plane() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = ray.intersect_plane_y(0.0).unwrap();
        assert!((hit - Vec3::new(1.0, 0.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn plane_behind_or_parallel_is_ignored() {
        let up = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(up.intersect_plane_y(0.0).is_none());

        let level = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(level.intersect_plane_y(0.0).is_none());
    }

    #[test]
    fn screen_center_looks_along_camera_forward() {
        let camera = Camera::default();
        let ray = Ray::from_screen(&camera, (50.0, 50.0), (100, 100)).unwrap();
        assert!(ray.direction.z < -0.99);
        assert!(ray.direction.x.abs() < 1e-4);
        assert!(ray.direction.y.abs() < 1e-4);
        assert!((ray.origin.z + camera.near).abs() < 1e-4);
    }

    #[test]
    fn screen_corners_bend_the_ray_outwards() {
        let camera = Camera::default();
        let upper_right = Ray::from_screen(&camera, (90.0, 10.0), (100, 100)).unwrap();
        assert!(upper_right.direction.x > 0.0);
        assert!(upper_right.direction.y > 0.0);

        let lower_left = Ray::from_screen(&camera, (10.0, 90.0), (100, 100)).unwrap();
        assert!(lower_left.direction.x < 0.0);
        assert!(lower_left.direction.y < 0.0);
    }

    #[test]
    fn empty_viewport_produces_no_ray() {
        let camera = Camera::default();
        assert!(Ray::from_screen(&camera, (0.0, 0.0), (0, 100)).is_none());
    }
}
