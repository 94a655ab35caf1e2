use std::mem::size_of;

use glam::Vec3;

/// A trait which each vertex type must implement.
pub trait Vertex: Copy + Clone + bytemuck::Pod + bytemuck::Zeroable {
    fn vertex_layout() -> wgpu::VertexBufferLayout<'static>;
}

/// A vertex with a position, a normal and a color, the format all scene
/// geometry is built in.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
}

impl Vertex for MeshVertex {
    fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32x3,
            2 => Float32x3,
        ];
        wgpu::VertexBufferLayout {
            array_stride: size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}
