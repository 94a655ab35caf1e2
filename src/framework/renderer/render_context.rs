use std::sync::Arc;

use crate::framework::gpu;

use super::Camera;

/// State shared by all render modules for the duration of a frame.
#[derive(Debug)]
pub struct RenderContext {
    pub gpu: Arc<gpu::Context>,

    /// The surface belongs to the renderer, modules read its format and size.
    pub surface_config: wgpu::SurfaceConfiguration,

    pub scale_factor: f64,

    /// Camera snapshot taken in `Renderer::prepare`.
    pub camera: Camera,
}
