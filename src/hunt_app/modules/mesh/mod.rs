///! Renders every `MeshInstance` entity as indexed instanced triangles.
///! One vertex and index buffer pair is uploaded per mesh in the scene pool,
///! the per frame instance transforms are gathered from the ECS world.

use std::{
    collections::{HashMap, hash_map::Entry},
    borrow::Cow
};

use crate::{
    hunt_app::{
        scene::Scene,
        components::MeshInstance,
        meshes::{Mesh, MeshID},
    },
    framework::{
        gui::Gui,
        math::Transform,
        gpu::{
            self,
            vertices::{MeshVertex, Vertex}
        },
        renderer::{
            self,
            RenderContext,
            RenderModule,
            RenderPassContext,
            RenderPass
        },
    },
};

// MeshInstanceData
// ----------------

/// One model matrix per drawn instance, pulled by the vertex stage as four
/// vec4 columns.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshInstanceData {
    model_matrix: glam::Mat4,
}

type InstanceBuffer = gpu::Buffer<MeshInstanceData>;
impl InstanceBuffer {
    pub fn vertex_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4,
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshInstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

// MeshRenderResource
// ------------------

#[derive(Debug)]
struct MeshRenderResource {
    vertex_buffer: gpu::Buffer<MeshVertex>,
    index_buffer: gpu::Buffer<u16>,
    instance_buffer: InstanceBuffer,
}

impl MeshRenderResource {

    #[profiler::function]
    fn new(mesh: &Mesh, instances: &[MeshInstanceData], gpu: &gpu::Context) -> Self {
        Self {
            vertex_buffer: gpu::Buffer::new(
                gpu,
                Some("Mesh Vertex Buffer"),
                &mesh.vertices,
                wgpu::BufferUsages::VERTEX,
            ),
            index_buffer: gpu::Buffer::new(
                gpu,
                Some("Mesh Index Buffer"),
                &mesh.indices,
                wgpu::BufferUsages::INDEX,
            ),
            instance_buffer: InstanceBuffer::new(
                gpu,
                Some("Mesh Instance Buffer"),
                instances,
                wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            ),
        }
    }
}

// MeshRenderModule
// ----------------

#[derive(Debug)]
pub struct MeshRenderModule {
    pipeline: wgpu::RenderPipeline,
    render_resources: HashMap<MeshID, MeshRenderResource>,
}

impl MeshRenderModule {

    #[profiler::function]
    pub fn new(context: &RenderContext) -> Self {
        counters::register!("instance_counter");

        let shader = context.gpu.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("_shader.wgsl"))),
        });

        let pipeline_layout = context.gpu.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Render Pipeline Layout"),
            bind_group_layouts: &[],
            // camera transform matrix goes in as a shader push constant
            push_constant_ranges: &[wgpu::PushConstantRange {
                stages: wgpu::ShaderStages::VERTEX_FRAGMENT,
                range: 0..std::mem::size_of::<renderer::camera::PushConstantData>() as u32,
            }],
        });

        let pipeline = context.gpu.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[
                    MeshVertex::vertex_layout(),
                    InstanceBuffer::vertex_layout(),
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.surface_config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology:           wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face:         wgpu::FrontFace::Ccw,
                cull_mode:          None,
                unclipped_depth:    false,
                polygon_mode:       wgpu::PolygonMode::Fill,
                conservative:       false,
            },

            // depth tested against the shared scene depth texture
            depth_stencil: Some(gpu::DepthStencilTexture::stencil()),

            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            pipeline,
            render_resources: HashMap::new()
        }
    }
}

impl RenderModule<Scene> for MeshRenderModule {

    #[profiler::function(pinned)]
    fn prepare(&mut self, _: &Gui, scene: &Scene, context: &RenderContext) {

        let mut instances: HashMap<MeshID, Vec<MeshInstanceData>> = {
            profiler::scope!("Collect mesh instances from world", pinned);
            let mut instances: HashMap<MeshID, Vec<MeshInstanceData>> = HashMap::new();
            for (_, (instance, transform)) in scene.world.query::<(&MeshInstance, &Transform)>().iter() {
                instances
                    .entry(instance.mesh)
                    .or_default()
                    .push(MeshInstanceData { model_matrix: transform.as_mat() });
            }
            instances
        };
        counters::sample!("instance_counter", instances.values().map(Vec::len).sum::<usize>() as f64);

        // Mesh geometry is immutable once in the pool, only instance sets
        // change from frame to frame.
        for (id, mesh) in scene.meshes.iter() {
            let data = instances.remove(&id).unwrap_or_default();
            match self.render_resources.entry(id) {
                Entry::Occupied(mut oe) => {
                    profiler::call!(oe.get_mut().instance_buffer.queue_update(&context.gpu, &data));
                },
                Entry::Vacant(ve) => {
                    ve.insert(MeshRenderResource::new(mesh, &data, &context.gpu));
                },
            }
        }
    }

    #[profiler::function]
    fn render<'pass, 'a: 'pass>(
        &'a self,
        context: &'a RenderContext,
        render_pass_context: &mut RenderPassContext<'pass>,
    ) {
        if let RenderPassContext {
            attachment: RenderPass::Base { .. },
            render_pass,
        } = render_pass_context {
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_push_constants(
                wgpu::ShaderStages::VERTEX_FRAGMENT,
                0,
                bytemuck::cast_slice(&[context.camera.to_push_constant_data()]),
            );

            for (_, resource) in &self.render_resources {
                if resource.instance_buffer.size == 0 {
                    continue;
                }
                profiler::scope!("Draw mesh instances");
                render_pass.set_vertex_buffer(0, resource.vertex_buffer.buffer.slice(..));
                render_pass.set_vertex_buffer(1, resource.instance_buffer.buffer.slice(..));
                render_pass.set_index_buffer(resource.index_buffer.buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(
                    0..resource.index_buffer.size as u32,
                    0,
                    0..resource.instance_buffer.size as u32,
                );
            }
        }
    }
}
