///! Procedural triangle meshes for the ground plane, the trees and the spheres.
///! Every mesh carries per vertex position, normal and color, indexed with u16.

use slotmap::{new_key_type, SlotMap};

use crate::framework::gpu::vertices::MeshVertex;


// ============================================================================================
// Mesh Pool
// ============================================================================================

new_key_type! {
    /// An index of a mesh which can be shared between multiple scene instances
    pub struct MeshID;
}
pub type MeshPool = SlotMap<MeshID, Mesh>;


// ============================================================================================
// Mesh
// ============================================================================================

const TRUNK_COLOR: glam::Vec3 = glam::Vec3::new(0.35, 0.23, 0.12);
const CANOPY_COLOR: glam::Vec3 = glam::Vec3::new(0.13, 0.45, 0.10);

#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl Mesh {

    /// Square on the XZ plane centered at the origin, facing up.
    pub fn plane(size: f32, color: glam::Vec3) -> Mesh {
        let half = size * 0.5;
        let normal = glam::Vec3::Y;
        Mesh {
            vertices: vec![
                MeshVertex { position: glam::vec3(-half, 0.0, -half), normal, color },
                MeshVertex { position: glam::vec3(-half, 0.0,  half), normal, color },
                MeshVertex { position: glam::vec3( half, 0.0,  half), normal, color },
                MeshVertex { position: glam::vec3( half, 0.0, -half), normal, color },
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// Sphere from latitude rings and longitude segments, seam column duplicated.
    pub fn uv_sphere(radius: f32, segments: u32, rings: u32, color: glam::Vec3) -> Mesh {
        let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
        let mut indices = Vec::with_capacity((rings * segments * 6) as usize);

        for ring in 0..=rings {
            let theta = std::f32::consts::PI * (ring as f32) / (rings as f32);
            let (sin_theta, cos_theta) = theta.sin_cos();
            for segment in 0..=segments {
                let phi = std::f32::consts::TAU * (segment as f32) / (segments as f32);
                let (sin_phi, cos_phi) = phi.sin_cos();
                let normal = glam::vec3(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
                vertices.push(MeshVertex {
                    position: normal * radius,
                    normal,
                    color,
                });
            }
        }

        for ring in 0..rings {
            for segment in 0..segments {
                let current = (ring * (segments + 1) + segment) as u16;
                let below = current + segments as u16 + 1;
                indices.extend_from_slice(&[
                    current, below, current + 1,
                    current + 1, below, below + 1,
                ]);
            }
        }

        Mesh { vertices, indices }
    }

    /// Open cylinder wall along the Y axis, from the origin up to `height`.
    pub fn cylinder(radius: f32, height: f32, segments: u32, color: glam::Vec3) -> Mesh {
        let mut vertices = Vec::with_capacity((2 * (segments + 1)) as usize);
        let mut indices = Vec::with_capacity((segments * 6) as usize);

        for segment in 0..=segments {
            let phi = std::f32::consts::TAU * (segment as f32) / (segments as f32);
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = glam::vec3(cos_phi, 0.0, sin_phi);
            let rim = normal * radius;
            vertices.push(MeshVertex { position: rim, normal, color });
            vertices.push(MeshVertex { position: rim + glam::Vec3::Y * height, normal, color });
        }

        for segment in 0..segments {
            let bottom = (segment * 2) as u16;
            indices.extend_from_slice(&[
                bottom, bottom + 1, bottom + 2,
                bottom + 2, bottom + 1, bottom + 3,
            ]);
        }

        Mesh { vertices, indices }
    }

    /// Oak like tree: a trunk with a round canopy sunk onto its top.
    pub fn tree(trunk_height: f32, trunk_radius: f32, canopy_radius: f32) -> Mesh {
        let mut mesh = Self::cylinder(trunk_radius, trunk_height, 8, TRUNK_COLOR);
        mesh.append(
            Self::uv_sphere(canopy_radius, 12, 8, CANOPY_COLOR)
                .translated(glam::Vec3::Y * (trunk_height + canopy_radius * 0.6))
        );
        mesh
    }

    pub fn translated(mut self, offset: glam::Vec3) -> Mesh {
        for vertex in self.vertices.iter_mut() {
            vertex.position += offset;
        }
        self
    }

    /// Appends another mesh, rebasing its indices past the current vertices.
    pub fn append(&mut self, other: Mesh) {
        let base = self.vertices.len() as u16;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|index| index + base));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_bounds(mesh: &Mesh) {
        for index in &mesh.indices {
            assert!((*index as usize) < mesh.vertices.len());
        }
    }

    #[test]
    fn plane_is_one_upward_quad() {
        let plane = Mesh::plane(40.0, glam::vec3(0.2, 0.5, 0.1));
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.indices.len(), 6);
        assert_indices_in_bounds(&plane);
        for vertex in &plane.vertices {
            assert_eq!(vertex.normal, glam::Vec3::Y);
            assert_eq!(vertex.position.y, 0.0);
        }
    }

    #[test]
    fn uv_sphere_lies_on_the_radius() {
        let radius = 0.5;
        let sphere = Mesh::uv_sphere(radius, 32, 16, glam::vec3(1.0, 0.843, 0.0));
        assert_eq!(sphere.vertices.len(), 33 * 17);
        assert_eq!(sphere.indices.len(), 32 * 16 * 6);
        assert_indices_in_bounds(&sphere);
        for vertex in &sphere.vertices {
            assert!((vertex.position.length() - radius).abs() < 1e-5);
            assert!((vertex.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cylinder_spans_zero_to_height() {
        let cylinder = Mesh::cylinder(0.2, 1.8, 8, glam::vec3(0.3, 0.2, 0.1));
        assert_indices_in_bounds(&cylinder);
        let min_y = cylinder.vertices.iter().map(|v| v.position.y).fold(f32::INFINITY, f32::min);
        let max_y = cylinder.vertices.iter().map(|v| v.position.y).fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min_y, 0.0);
        assert_eq!(max_y, 1.8);
    }

    #[test]
    fn tree_combines_trunk_and_canopy() {
        let tree = Mesh::tree(1.8, 0.18, 1.3);
        assert_indices_in_bounds(&tree);
        assert!(tree.vertices.iter().any(|v| v.color == TRUNK_COLOR));
        assert!(tree.vertices.iter().any(|v| v.color == CANOPY_COLOR));
        // canopy reaches above the trunk
        let max_y = tree.vertices.iter().map(|v| v.position.y).fold(f32::NEG_INFINITY, f32::max);
        assert!(max_y > 1.8);
    }

    #[test]
    fn append_rebases_indices() {
        let mut mesh = Mesh::plane(1.0, glam::Vec3::ONE);
        let first_part_vertices = mesh.vertices.len();
        mesh.append(Mesh::plane(2.0, glam::Vec3::ONE));
        assert_indices_in_bounds(&mesh);
        assert!(mesh.indices[6..].iter().all(|i| (*i as usize) >= first_part_vertices));
    }
}
